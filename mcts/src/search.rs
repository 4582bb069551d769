use std::time::Duration;
use log::{debug, log_enabled, trace, Level};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use crate::config::{FinalSelection, MctsConfig};
use crate::error::{MctsError, Result};
use crate::game::Game;
use crate::mcts::{backpropagate, expand, select, simulate, Termination};
use crate::tree::{NodeId, SearchTree};

/// Statistics of one of the root's children at the end of a decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats<A> {
    pub action: A,
    pub visits: usize,
    pub outcome_total: f64,
    pub win_rate: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SearchReport<A, P> {
    pub action: A,
    pub bot: P,
    pub children: Vec<ChildStats<A>>,
    pub iterations: usize,
    pub tree_size: usize,
    pub max_depth: usize,
    pub elapsed: Duration,
}

impl<A: PartialEq, P> SearchReport<A, P> {
    pub fn child(&self, action: &A) -> Option<&ChildStats<A>> {
        self.children.iter().find(|c| c.action == *action)
    }
}

/// Single-threaded UCT searcher. Every decision builds a fresh tree from a
/// copy of the caller's state and throws it away before returning.
#[derive(Debug, Clone, Default)]
pub struct Mcts {
    config: MctsConfig,
}

impl Mcts {
    pub fn new(config: MctsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn think<G: Game, R: Rng + Sized>(&self, game: &G, state: &G::State, rng: &mut R) -> Result<G::Action, G::Error> {
        self.search(game, state, rng).map(|report| report.action)
    }

    pub fn think_seeded<G: Game>(&self, game: &G, state: &G::State, seed: u64) -> Result<G::Action, G::Error> {
        let mut rng = Pcg64::seed_from_u64(seed);
        self.think(game, state, &mut rng)
    }

    pub fn search<G: Game, R: Rng + Sized>(
        &self,
        game: &G,
        state: &G::State,
        rng: &mut R,
    ) -> Result<SearchReport<G::Action, G::Player>, G::Error> {
        self.search_tree(game, state, rng).map(|(report, _)| report)
    }

    /// Like [`Mcts::search`], but also hands back the finished tree.
    pub fn search_tree<G: Game, R: Rng + Sized>(
        &self,
        game: &G,
        state: &G::State,
        rng: &mut R,
    ) -> Result<(SearchReport<G::Action, G::Player>, SearchTree<G::Action>), G::Error> {
        self.config.validate::<G::Error>()?;

        let bot = game.current_player(state);
        let root_actions = game.legal_actions(state);
        if root_actions.is_empty() {
            return Err(MctsError::EmptyActionSpace);
        }

        debug!("searching for {:?} over {} root actions with {:?}", bot, root_actions.len(), self.config.budget);

        let mut tree = SearchTree::new(root_actions);
        let mut termination = Termination::start(self.config.budget);

        while termination.should_continue() {
            self.iterate(game, &mut tree, state, bot, rng)?;
            termination.record_iteration();
        }

        if self.config.check_invariants || cfg!(debug_assertions) {
            tree.check_invariants::<G::Error>()?;
            tree.check_root_visits::<G::Error>(termination.iterations())?;
        }

        let chosen = self.choose_child::<G, R>(&tree, rng)?;
        let Some(action) = tree.get(chosen).parent_action().cloned() else {
            return Err(MctsError::InconsistentTreeState(format!("{chosen:?} has no parent action")));
        };

        let children = tree
            .get(tree.root())
            .children()
            .iter()
            .filter_map(|id| {
                let node = tree.get(*id);
                node.parent_action().map(|child_action| ChildStats {
                    action: child_action.clone(),
                    visits: node.visits(),
                    outcome_total: node.outcome_total(),
                    win_rate: node.win_rate(),
                })
            })
            .collect();

        let report = SearchReport {
            action,
            bot,
            children,
            iterations: termination.iterations(),
            tree_size: tree.len(),
            max_depth: tree.max_depth(),
            elapsed: termination.elapsed(),
        };

        debug!(
            "picking {:?} for {:?} after {} iterations ({} nodes, depth {}, {:?})",
            report.action, report.bot, report.iterations, report.tree_size, report.max_depth, report.elapsed
        );

        Ok((report, tree))
    }

    /// select -> expand -> simulate -> backpropagate, on a private copy of `state`.
    fn iterate<G: Game, R: Rng + Sized>(
        &self,
        game: &G,
        tree: &mut SearchTree<G::Action>,
        state: &G::State,
        bot: G::Player,
        rng: &mut R,
    ) -> Result<(), G::Error> {
        let (frontier, frontier_state) = select(game, tree, bot, state.clone(), self.config.exploration)?;
        let (leaf, leaf_state) = expand(game, tree, frontier, frontier_state, rng)?;
        let outcome = simulate(game, leaf_state, bot, &self.config, rng)?;

        backpropagate(tree, leaf, outcome);

        if log_enabled!(Level::Trace) {
            trace!(
                "iteration {}: leaf {:?} via {:?} scored {}",
                tree.get(tree.root()).visits(),
                leaf,
                tree.get(leaf).parent_action(),
                outcome
            );
        }

        Ok(())
    }

    fn choose_child<G: Game, R: Rng + Sized>(&self, tree: &SearchTree<G::Action>, rng: &mut R) -> Result<NodeId, G::Error> {
        // unvisited children have no win rate to compare
        let visited: Vec<NodeId> = tree
            .get(tree.root())
            .children()
            .iter()
            .copied()
            .filter(|id| tree.get(*id).visits() > 0)
            .collect();

        if visited.is_empty() {
            return Err(MctsError::InconsistentTreeState("root has no visited children".to_string()));
        }

        let chosen = match self.config.final_selection {
            FinalSelection::WinRate => {
                let mut best_rate = 0.0;
                let mut best = None;

                for id in &visited {
                    let rate = tree.get(*id).win_rate().ok_or(MctsError::<G::Error>::DivisionByZeroStat)?;
                    if rate > best_rate {
                        best_rate = rate;
                        best = Some(*id);
                    }
                }

                // nothing beat the baseline, no child is preferred
                best.or_else(|| visited.choose(rng).copied())
            }
            FinalSelection::MostVisits => {
                let mut best: Option<NodeId> = None;
                for id in &visited {
                    if best.map_or(true, |b| tree.get(*id).visits() > tree.get(b).visits()) {
                        best = Some(*id);
                    }
                }
                best
            }
        };

        chosen.ok_or_else(|| MctsError::InconsistentTreeState("no root child could be chosen".to_string()))
    }
}

/// Picks an action for the player to move at `state` with the default
/// configuration and the thread-local generator.
pub fn think<G: Game>(game: &G, state: &G::State) -> Result<G::Action, G::Error> {
    Mcts::default().think(game, state, &mut rand::thread_rng())
}
