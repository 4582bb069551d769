use rand::Rng;
use crate::error::{MctsError, Result};
use crate::game::Game;
use crate::tree::{NodeId, SearchTree};

/// Materializes one random untried action of `node` as a new child.
///
/// A node with neither untried actions nor children is terminal; it is handed
/// back unchanged together with `state`.
pub fn expand<G: Game, R: Rng + Sized>(
    game: &G,
    tree: &mut SearchTree<G::Action>,
    node: NodeId,
    state: G::State,
    rng: &mut R,
) -> Result<(NodeId, G::State), G::Error> {
    let untried = tree.get(node).untried_actions();

    if untried.is_empty() {
        if tree.get(node).children().is_empty() {
            return Ok((node, state));
        }
        return Err(MctsError::InconsistentTreeState(format!("{node:?} is fully expanded and cannot grow")));
    }

    let random_index = rng.gen_range(0..untried.len());
    let next_state = game.next_state(&state, &untried[random_index]).map_err(MctsError::Game)?;

    let next_actions = if game.is_ended(&next_state) {
        Vec::new()
    } else {
        game.legal_actions(&next_state)
    };

    let action = tree.get_mut(node).untried_actions.swap_remove(random_index);
    let child = tree.add_child(node, action, next_actions);

    Ok((child, next_state))
}
