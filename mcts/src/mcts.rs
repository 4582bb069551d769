pub mod backpropagation;
pub mod expansion;
pub mod random_rollout;
pub mod sampled_rollout;
pub mod selection;
mod termination;

use rand::Rng;
use crate::config::{MctsConfig, RolloutPolicy};
use crate::error::{MctsError, Result};
use crate::game::Game;

pub use backpropagation::backpropagate;
pub use expansion::expand;
pub use random_rollout::random_rollout;
pub use sampled_rollout::sampled_rollout;
pub use selection::select;
pub use termination::{Budget, Termination};

/// Plays `state` out with the configured rollout policy and returns the final
/// points of `bot`.
pub fn simulate<G: Game, R: Rng + Sized>(
    game: &G,
    state: G::State,
    bot: G::Player,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<f64, G::Error> {
    let terminal = match config.rollout {
        RolloutPolicy::UniformRandom => random_rollout(game, state, rng)?,
        RolloutPolicy::Sampled { samples, depth } => {
            sampled_rollout(game, state, samples, depth, config.terminal_margin_scale, rng)?
        }
    };

    outcome(game, &terminal, bot)
}

pub fn outcome<G: Game>(game: &G, terminal: &G::State, bot: G::Player) -> Result<f64, G::Error> {
    game.points_values(terminal)
        .and_then(|points| points.get(&bot).copied())
        .ok_or(MctsError::MissingOutcome)
}
