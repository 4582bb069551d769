use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Final score of every player once a game has ended.
pub type Points<P> = HashMap<P, f64>;

/// The rules of a two-player, turn-based, perfect-information game.
///
/// The engine never mutates a state it is given; every transition goes through
/// [`Game::next_state`], which must return a fresh state.
pub trait Game {
    type State: Clone;
    type Action: Clone + Eq + Hash + Debug;
    type Player: Copy + Eq + Hash + Debug;
    type Error: Debug;

    fn players(&self) -> Vec<Self::Player>;
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// Never empty for a state where `is_ended` is false.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn next_state(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State, Self::Error>;
    fn is_ended(&self, state: &Self::State) -> bool;

    /// `Some` once `is_ended` is true. Values share one numeric range for all
    /// players, e.g. `{-1, 0, 1}` or a margin score.
    fn points_values(&self, state: &Self::State) -> Option<Points<Self::Player>>;

    /// Running tally of `player` in an unfinished game (boxes owned, captured
    /// pieces...). Only the sampled rollout reads it.
    fn tally(&self, _state: &Self::State, _player: Self::Player) -> Option<f64> {
        None
    }

    /// The player facing `player`.
    fn opponent(&self, player: Self::Player) -> Option<Self::Player> {
        self.players().into_iter().find(|p| *p != player)
    }
}
