use rand::Rng;
use crate::error::{MctsError, Result};
use crate::game::Game;

/// Plays uniformly random legal actions until the game ends.
pub fn random_rollout<G: Game, R: Rng + Sized>(game: &G, mut state: G::State, rng: &mut R) -> Result<G::State, G::Error> {
    loop {
        if game.is_ended(&state) {
            return Ok(state);
        }

        let actions = game.legal_actions(&state);
        if actions.is_empty() {
            return Err(MctsError::EmptyActionSpace);
        }

        let random_action = &actions[rng.gen_range(0..actions.len())];

        state = game.next_state(&state, random_action).map_err(MctsError::Game)?;
    }
}
