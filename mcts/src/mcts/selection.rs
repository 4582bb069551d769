use crate::error::{MctsError, Result};
use crate::game::Game;
use crate::tree::{Node, NodeId, SearchTree};

/// Upper confidence bound of `child` as seen by whoever moves at its parent.
///
/// Outcomes are stored from the bot's point of view, so when the opponent is
/// to move the exploitation term is flipped to `1 - rate`.
pub fn uct_score<A, E: std::fmt::Debug>(parent_visits: usize, child: &Node<A>, opponent_to_move: bool, exploration: f64) -> Result<f64, E> {
    let rate = child.win_rate().ok_or(MctsError::<E>::DivisionByZeroStat)?;
    let perspective_rate = if opponent_to_move { 1.0 - rate } else { rate };
    let explore = (2.0 * (parent_visits as f64).ln() / child.visits() as f64).sqrt();

    Ok(perspective_rate + exploration * explore)
}

/// The child of `node` with the highest UCT score, first one on ties.
pub fn best_child<A, E: std::fmt::Debug>(tree: &SearchTree<A>, node: NodeId, opponent_to_move: bool, exploration: f64) -> Result<Option<NodeId>, E>
where
    A: Clone + PartialEq + std::fmt::Debug,
{
    let parent_visits = tree.get(node).visits();

    let mut urgent_child = None;
    let mut prev_bound = f64::NEG_INFINITY;

    for child in tree.get(node).children() {
        let bound = uct_score::<A, E>(parent_visits, tree.get(*child), opponent_to_move, exploration)?;
        if bound > prev_bound {
            prev_bound = bound;
            urgent_child = Some(*child);
        }
    }

    Ok(urgent_child)
}

/// Descends from the root through fully expanded nodes until reaching one that
/// still has untried actions or has no children at all. Returns that node with
/// the state reached by replaying the chosen actions onto `state`.
pub fn select<G: Game>(
    game: &G,
    tree: &SearchTree<G::Action>,
    bot: G::Player,
    mut state: G::State,
    exploration: f64,
) -> Result<(NodeId, G::State), G::Error> {
    let mut node = tree.root();

    while tree.get(node).is_fully_expanded() && !tree.get(node).children().is_empty() {
        let opponent_to_move = game.current_player(&state) != bot;

        let Some(child) = best_child::<_, G::Error>(tree, node, opponent_to_move, exploration)? else {
            return Err(MctsError::InconsistentTreeState(format!("no child of {node:?} could be scored")));
        };

        let Some(action) = tree.get(child).parent_action() else {
            return Err(MctsError::InconsistentTreeState(format!("{child:?} has no parent action")));
        };

        state = game.next_state(&state, action).map_err(MctsError::Game)?;
        node = child;
    }

    Ok((node, state))
}
