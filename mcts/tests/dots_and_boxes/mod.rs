use std::cmp::Ordering;
use mcts::{Game, Points};

/// Dots and boxes on a `rows` x `cols` grid of boxes. Completing a box claims
/// it and grants another move.
///
/// Edges are numbered horizontal first, row by row, then vertical, row by row.
pub struct DotsAndBoxes {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Board {
    pub drawn: Vec<bool>,
    pub owners: Vec<Option<u8>>,
    pub to_move: u8,
}

#[derive(Debug, PartialEq)]
pub enum MoveError {
    NoSuchEdge(usize),
    AlreadyDrawn(usize),
}

impl DotsAndBoxes {
    pub fn new(rows: usize, cols: usize) -> Self {
        DotsAndBoxes { rows, cols }
    }

    pub fn horizontal(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn vertical(&self, row: usize, col: usize) -> usize {
        (self.rows + 1) * self.cols + row * (self.cols + 1) + col
    }

    pub fn edge_count(&self) -> usize {
        (self.rows + 1) * self.cols + self.rows * (self.cols + 1)
    }

    pub fn initial(&self) -> Board {
        Board {
            drawn: vec![false; self.edge_count()],
            owners: vec![None; self.rows * self.cols],
            to_move: 1,
        }
    }

    /// A board with every edge drawn except `open`.
    pub fn with_open_edges(&self, open: &[usize], to_move: u8) -> Board {
        let mut board = self.initial();
        board.drawn.iter_mut().enumerate().for_each(|(idx, d)| *d = !open.contains(&idx));
        board.to_move = to_move;
        board
    }

    fn box_edges(&self, row: usize, col: usize) -> [usize; 4] {
        [
            self.horizontal(row, col),
            self.horizontal(row + 1, col),
            self.vertical(row, col),
            self.vertical(row, col + 1),
        ]
    }

    fn boxes(&self) -> impl Iterator<Item = (usize, [usize; 4])> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (row * self.cols + col, self.box_edges(row, col)))
        })
    }

    fn owned_boxes(&self, state: &Board, player: u8) -> usize {
        state.owners.iter().filter(|o| **o == Some(player)).count()
    }
}

impl Game for DotsAndBoxes {
    type State = Board;
    type Action = usize;
    type Player = u8;
    type Error = MoveError;

    fn players(&self) -> Vec<u8> {
        vec![1, 2]
    }

    fn current_player(&self, state: &Board) -> u8 {
        state.to_move
    }

    fn legal_actions(&self, state: &Board) -> Vec<usize> {
        state.drawn.iter().enumerate().filter(|(_, d)| !**d).map(|(idx, _)| idx).collect()
    }

    fn next_state(&self, state: &Board, action: &usize) -> Result<Board, MoveError> {
        match state.drawn.get(*action) {
            None => return Err(MoveError::NoSuchEdge(*action)),
            Some(true) => return Err(MoveError::AlreadyDrawn(*action)),
            Some(false) => {}
        }

        let mut board = state.clone();
        board.drawn[*action] = true;

        let mut claimed = false;
        for (box_idx, edges) in self.boxes() {
            if board.owners[box_idx].is_none() && edges.contains(action) && edges.iter().all(|e| board.drawn[*e]) {
                board.owners[box_idx] = Some(state.to_move);
                claimed = true;
            }
        }

        if !claimed {
            board.to_move = 3 - state.to_move;
        }

        Ok(board)
    }

    fn is_ended(&self, state: &Board) -> bool {
        state.drawn.iter().all(|d| *d)
    }

    fn points_values(&self, state: &Board) -> Option<Points<u8>> {
        if !self.is_ended(state) {
            return None;
        }

        let red = self.owned_boxes(state, 1) as f64;
        let blue = self.owned_boxes(state, 2) as f64;
        let lead = match red.partial_cmp(&blue) {
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Less) => -1.0,
            _ => 0.0,
        };

        Some([(1, lead), (2, -lead)].into_iter().collect())
    }

    fn tally(&self, state: &Board, player: u8) -> Option<f64> {
        Some(self.owned_boxes(state, player) as f64)
    }
}
