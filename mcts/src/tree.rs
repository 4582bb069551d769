//! Arena-backed search tree.
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. A node owns
//! its children through their ids; the parent link is a plain id used only to
//! walk back up during backpropagation. The arena is dropped as a whole when
//! the decision that built it returns.

use std::fmt::Debug;
use crate::error::{MctsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node<A> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) parent_action: Option<A>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) untried_actions: Vec<A>,
    pub(crate) visits: usize,
    pub(crate) outcome_total: f64,
    pub(crate) depth: usize,
}

impl<A> Node<A> {
    fn new(parent: Option<NodeId>, parent_action: Option<A>, untried_actions: Vec<A>, depth: usize) -> Self {
        Self {
            parent,
            parent_action,
            children: Vec::new(),
            untried_actions,
            visits: 0,
            outcome_total: 0.0,
            depth,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn parent_action(&self) -> Option<&A> {
        self.parent_action.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn untried_actions(&self) -> &[A] {
        &self.untried_actions
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn outcome_total(&self) -> f64 {
        self.outcome_total
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// No untried actions and no children: the game ended here.
    pub fn is_terminal(&self) -> bool {
        self.untried_actions.is_empty() && self.children.is_empty()
    }

    /// `outcome_total / visits`, or `None` before the first visit.
    pub fn win_rate(&self) -> Option<f64> {
        if self.visits == 0 {
            None
        } else {
            Some(self.outcome_total / self.visits as f64)
        }
    }

    pub(crate) fn record(&mut self, outcome: f64) {
        self.visits += 1;
        self.outcome_total += outcome;
    }
}

#[derive(Debug, Clone)]
pub struct SearchTree<A> {
    nodes: Vec<Node<A>>,
}

impl<A: Clone + PartialEq + Debug> SearchTree<A> {
    pub fn new(root_actions: Vec<A>) -> Self {
        Self {
            nodes: vec![Node::new(None, None, root_actions, 0)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> &Node<A> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<A> {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<A>)> {
        self.nodes.iter().enumerate().map(|(idx, node)| (NodeId(idx), node))
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn child_with_action(&self, parent: NodeId, action: &A) -> Option<NodeId> {
        self.get(parent)
            .children
            .iter()
            .copied()
            .find(|child| self.get(*child).parent_action.as_ref() == Some(action))
    }

    /// Links a fresh child under `parent`. The caller is responsible for having
    /// removed `action` from the parent's untried set.
    pub(crate) fn add_child(&mut self, parent: NodeId, action: A, untried_actions: Vec<A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.get(parent).depth + 1;

        self.nodes.push(Node::new(Some(parent), Some(action), untried_actions, depth));
        self.get_mut(parent).children.push(id);

        id
    }

    /// Walks the whole arena and reports the first bookkeeping violation.
    pub fn check_invariants<E: Debug>(&self) -> Result<(), E> {
        for (id, node) in self.nodes() {
            if node.visits == 0 && node.outcome_total != 0.0 {
                return Err(inconsistent(format!("{id:?} has an outcome total of {} without visits", node.outcome_total)));
            }

            match (node.parent, &node.parent_action) {
                (None, None) if id == self.root() => {}
                (Some(parent), Some(_)) if parent.0 < self.nodes.len() => {
                    if !self.get(parent).children.contains(&id) {
                        return Err(inconsistent(format!("{id:?} is not registered under its parent {parent:?}")));
                    }
                }
                _ => return Err(inconsistent(format!("{id:?} has a malformed parent link"))),
            }

            let mut child_visits = 0;
            for (idx, child) in node.children.iter().enumerate() {
                let child_node = self.get(*child);

                if child_node.parent != Some(id) {
                    return Err(inconsistent(format!("{child:?} does not point back to {id:?}")));
                }

                let Some(action) = &child_node.parent_action else {
                    return Err(inconsistent(format!("{child:?} has no parent action")));
                };

                if node.untried_actions.contains(action) {
                    return Err(inconsistent(format!("{action:?} is both tried and untried at {id:?}")));
                }

                let duplicated = node.children[..idx]
                    .iter()
                    .any(|sibling| self.get(*sibling).parent_action.as_ref() == Some(action));
                if duplicated {
                    return Err(inconsistent(format!("{action:?} was expanded twice at {id:?}")));
                }

                child_visits += child_node.visits;
            }

            if child_visits > node.visits {
                return Err(inconsistent(format!("children of {id:?} have more visits ({child_visits}) than the node ({})", node.visits)));
            }
        }

        Ok(())
    }

    /// Every iteration backpropagates exactly one path through the root.
    pub fn check_root_visits<E: Debug>(&self, iterations: usize) -> Result<(), E> {
        let visits = self.get(self.root()).visits;
        if visits != iterations {
            return Err(inconsistent(format!("root has {visits} visits after {iterations} iterations")));
        }

        Ok(())
    }
}

fn inconsistent<E: Debug>(message: String) -> MctsError<E> {
    MctsError::InconsistentTreeState(message)
}
