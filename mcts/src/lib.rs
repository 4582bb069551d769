mod config;
mod error;
mod game;
mod graph;
mod search;
mod tree;
pub mod mcts;

pub use config::{FinalSelection, MctsConfig, RolloutPolicy};
pub use error::{MctsError, Result};
pub use game::{Game, Points};
pub use graph::{GraphEdge, GraphNode, TreeGraph};
pub use mcts::Budget;
pub use search::{think, ChildStats, Mcts, SearchReport};
pub use tree::{Node, NodeId, SearchTree};
