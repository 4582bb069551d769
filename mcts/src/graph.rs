use std::fmt::Debug;
use petgraph::{Directed, Graph};
use petgraph::graph::NodeIndex;
use crate::tree::SearchTree;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
    pub visits: usize,
    pub outcome_total: f64,
    pub untried: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphEdge<A: Clone + Eq + PartialEq> {
    /// Visits of the child the edge leads to.
    pub count: usize,
    pub action: A,
}

pub type TreeGraph<A> = Graph<GraphNode, GraphEdge<A>, Directed>;

impl<A: Clone + Eq + PartialEq + Debug> SearchTree<A> {
    /// Copies the tree into a `petgraph` graph for inspection. Graph node
    /// indices follow the arena order, so the root is index 0.
    pub fn to_graph(&self) -> TreeGraph<A> {
        let mut graph: TreeGraph<A> = Graph::with_capacity(self.len(), self.len().saturating_sub(1));

        let indices: Vec<NodeIndex> = self
            .nodes()
            .map(|(_, node)| {
                graph.add_node(GraphNode {
                    visits: node.visits(),
                    outcome_total: node.outcome_total(),
                    untried: node.untried_actions().len(),
                })
            })
            .collect();

        for (id, node) in self.nodes() {
            if let (Some(parent), Some(action)) = (node.parent(), node.parent_action()) {
                graph.add_edge(
                    indices[parent.index()],
                    indices[id.index()],
                    GraphEdge { count: node.visits(), action: action.clone() },
                );
            }
        }

        graph
    }
}
