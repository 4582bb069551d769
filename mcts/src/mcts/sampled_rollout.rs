use rand::Rng;
use crate::error::{MctsError, Result};
use crate::game::Game;

/// Greedy playout guided by short random lookaheads.
///
/// At every ply each legal action is scored by averaging the margin heuristic
/// over `samples` continuations of at most `depth` random plies, and the best
/// scoring action is committed. Repeats until the game ends.
pub fn sampled_rollout<G: Game, R: Rng + Sized>(
    game: &G,
    mut state: G::State,
    samples: usize,
    depth: usize,
    terminal_scale: f64,
    rng: &mut R,
) -> Result<G::State, G::Error> {
    while !game.is_ended(&state) {
        let (best_action, _) = best_sampled_action(game, &state, samples, depth, terminal_scale, rng)?;
        state = game.next_state(&state, &best_action).map_err(MctsError::Game)?;
    }

    Ok(state)
}

/// The action with the highest average margin for the player to move at
/// `state`, first one on ties.
pub fn best_sampled_action<G: Game, R: Rng + Sized>(
    game: &G,
    state: &G::State,
    samples: usize,
    depth: usize,
    terminal_scale: f64,
    rng: &mut R,
) -> Result<(G::Action, f64), G::Error> {
    let me = game.current_player(state);
    let samples = samples.max(1);

    let mut best: Option<(G::Action, f64)> = None;

    for action in game.legal_actions(state) {
        let mut total_score = 0.0;

        for _ in 0..samples {
            let mut sample_state = game.next_state(state, &action).map_err(MctsError::Game)?;

            for _ in 0..depth {
                if game.is_ended(&sample_state) {
                    break;
                }

                let moves = game.legal_actions(&sample_state);
                if moves.is_empty() {
                    return Err(MctsError::EmptyActionSpace);
                }

                let sample_move = &moves[rng.gen_range(0..moves.len())];
                sample_state = game.next_state(&sample_state, sample_move).map_err(MctsError::Game)?;
            }

            total_score += margin(game, &sample_state, me, terminal_scale);
        }

        let expectation = total_score / samples as f64;

        if best.as_ref().map_or(true, |(_, best_expectation)| expectation > *best_expectation) {
            best = Some((action, expectation));
        }
    }

    best.ok_or(MctsError::EmptyActionSpace)
}

/// `player`'s lead over the opponent: final points (scaled) once the game has
/// ended, the running tally before that.
pub fn margin<G: Game>(game: &G, state: &G::State, player: G::Player, terminal_scale: f64) -> f64 {
    let opponent = game.opponent(player);

    if game.is_ended(state) {
        if let Some(points) = game.points_values(state) {
            let mine = points.get(&player).copied().unwrap_or(0.0);
            let theirs = opponent.and_then(|o| points.get(&o).copied()).unwrap_or(0.0);
            return (mine - theirs) * terminal_scale;
        }
    }

    let mine = game.tally(state, player).unwrap_or(0.0);
    let theirs = opponent.and_then(|o| game.tally(state, o)).unwrap_or(0.0);

    mine - theirs
}
