use mcts::{Game, Points};

/// Single pile; players alternately take one or two stones, whoever takes
/// the last stone wins.
#[derive(Default)]
pub struct TakeAway;

#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Pile {
    pub stones: u8,
    pub to_move: u8,
}

impl Pile {
    pub fn new(stones: u8) -> Self {
        Pile { stones, to_move: 1 }
    }
}

#[derive(Debug, PartialEq)]
pub enum TakeAwayError {
    NotEnoughStones,
    InvalidTake,
}

impl Game for TakeAway {
    type State = Pile;
    type Action = u8;
    type Player = u8;
    type Error = TakeAwayError;

    fn players(&self) -> Vec<u8> {
        vec![1, 2]
    }

    fn current_player(&self, state: &Pile) -> u8 {
        state.to_move
    }

    fn legal_actions(&self, state: &Pile) -> Vec<u8> {
        (1..=2).filter(|take| *take <= state.stones).collect()
    }

    fn next_state(&self, state: &Pile, action: &u8) -> Result<Pile, TakeAwayError> {
        if !(1..=2).contains(action) {
            return Err(TakeAwayError::InvalidTake);
        }
        if *action > state.stones {
            return Err(TakeAwayError::NotEnoughStones);
        }

        Ok(Pile {
            stones: state.stones - action,
            to_move: 3 - state.to_move,
        })
    }

    fn is_ended(&self, state: &Pile) -> bool {
        state.stones == 0
    }

    fn points_values(&self, state: &Pile) -> Option<Points<u8>> {
        if !self.is_ended(state) {
            return None;
        }

        // the player who just moved took the last stone
        let winner = 3 - state.to_move;
        Some([(winner, 1.0), (state.to_move, -1.0)].into_iter().collect())
    }
}
