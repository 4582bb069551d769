use mcts::{Game, Points};

/// Player 1 makes a single choice and the game is over. `options[i]` is what
/// player 1 scores for choosing `i`; player 2 scores the opposite.
pub struct OneShot {
    pub options: Vec<f64>,
}

#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub enum OneShotState {
    Start,
    Chosen(usize),
}

#[derive(Debug, PartialEq)]
pub struct IllegalChoice(pub usize);

impl OneShot {
    pub fn forced_win() -> Self {
        OneShot { options: vec![-1.0, 1.0] }
    }

    pub fn symmetric(width: usize) -> Self {
        OneShot { options: vec![0.0; width] }
    }
}

impl Game for OneShot {
    type State = OneShotState;
    type Action = usize;
    type Player = u8;
    type Error = IllegalChoice;

    fn players(&self) -> Vec<u8> {
        vec![1, 2]
    }

    fn current_player(&self, state: &OneShotState) -> u8 {
        match state {
            OneShotState::Start => 1,
            OneShotState::Chosen(_) => 2,
        }
    }

    fn legal_actions(&self, state: &OneShotState) -> Vec<usize> {
        match state {
            OneShotState::Start => (0..self.options.len()).collect(),
            OneShotState::Chosen(_) => Vec::new(),
        }
    }

    fn next_state(&self, state: &OneShotState, action: &usize) -> Result<OneShotState, IllegalChoice> {
        match state {
            OneShotState::Start if *action < self.options.len() => Ok(OneShotState::Chosen(*action)),
            _ => Err(IllegalChoice(*action)),
        }
    }

    fn is_ended(&self, state: &OneShotState) -> bool {
        matches!(state, OneShotState::Chosen(_))
    }

    fn points_values(&self, state: &OneShotState) -> Option<Points<u8>> {
        match state {
            OneShotState::Start => None,
            OneShotState::Chosen(idx) => {
                let score = self.options[*idx];
                Some([(1, score), (2, -score)].into_iter().collect())
            }
        }
    }
}

/// Every transition is refused.
pub struct Broken;

impl Game for Broken {
    type State = ();
    type Action = u8;
    type Player = u8;
    type Error = String;

    fn players(&self) -> Vec<u8> {
        vec![1, 2]
    }

    fn current_player(&self, _state: &()) -> u8 {
        1
    }

    fn legal_actions(&self, _state: &()) -> Vec<u8> {
        vec![0, 1]
    }

    fn next_state(&self, _state: &(), action: &u8) -> Result<(), String> {
        Err(format!("move {action} is not implemented"))
    }

    fn is_ended(&self, _state: &()) -> bool {
        false
    }

    fn points_values(&self, _state: &()) -> Option<Points<u8>> {
        None
    }
}
