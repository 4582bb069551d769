use crate::tree::{NodeId, SearchTree};

/// Adds one visit and `outcome` to `node` and every ancestor up to the root.
pub fn backpropagate<A>(tree: &mut SearchTree<A>, node: NodeId, outcome: f64)
where
    A: Clone + PartialEq + std::fmt::Debug,
{
    let mut current = Some(node);

    while let Some(id) = current {
        let node = tree.get_mut(id);
        node.record(outcome);
        current = node.parent();
    }
}
