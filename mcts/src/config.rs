use std::fmt::Debug;
use serde::{Deserialize, Serialize};
use crate::error::{MctsError, Result};
use crate::mcts::Budget;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolloutPolicy {
    /// Random legal actions until the game ends.
    UniformRandom,
    /// Greedy playout: every candidate action is scored by `samples` random
    /// continuations of at most `depth` plies, the best average is committed.
    Sampled { samples: usize, depth: usize },
}

impl RolloutPolicy {
    pub fn sampled() -> Self {
        RolloutPolicy::Sampled { samples: 3, depth: 2 }
    }
}

/// How the action is read off the root's children once the budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSelection {
    WinRate,
    MostVisits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    pub budget: Budget,
    pub exploration: f64,
    pub rollout: RolloutPolicy,
    pub final_selection: FinalSelection,
    /// Weight applied to final points by the sampled rollout so they outrank
    /// any running tally.
    pub terminal_margin_scale: f64,
    pub check_invariants: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            budget: Budget::Iterations(1000),
            exploration: 2.0,
            rollout: RolloutPolicy::UniformRandom,
            final_selection: FinalSelection::WinRate,
            terminal_margin_scale: 9.0,
            check_invariants: false,
        }
    }
}

impl MctsConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.budget = Budget::Iterations(iterations);
        self
    }

    pub fn with_millis(mut self, millis: u64) -> Self {
        self.budget = Budget::Millis(millis);
        self
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn with_rollout(mut self, rollout: RolloutPolicy) -> Self {
        self.rollout = rollout;
        self
    }

    pub fn with_final_selection(mut self, final_selection: FinalSelection) -> Self {
        self.final_selection = final_selection;
        self
    }

    pub fn with_terminal_margin_scale(mut self, scale: f64) -> Self {
        self.terminal_margin_scale = scale;
        self
    }

    pub fn with_invariant_checks(mut self, check_invariants: bool) -> Self {
        self.check_invariants = check_invariants;
        self
    }

    pub fn from_json<E: Debug>(json: &str) -> Result<Self, E> {
        let config: MctsConfig = serde_json::from_str(json)
            .map_err(|e| MctsError::<E>::InvalidConfig(e.to_string()))?;
        config.validate::<E>()?;
        Ok(config)
    }

    pub fn validate<E: Debug>(&self) -> Result<(), E> {
        match self.budget {
            Budget::Iterations(0) => return Err(MctsError::InvalidConfig("iteration budget must be positive".into())),
            Budget::Millis(0) => return Err(MctsError::InvalidConfig("time budget must be positive".into())),
            _ => {}
        }

        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(MctsError::InvalidConfig(format!("exploration factor must be positive, got {}", self.exploration)));
        }

        if let RolloutPolicy::Sampled { samples: 0, .. } = self.rollout {
            return Err(MctsError::InvalidConfig("sampled rollout needs at least one sample".into()));
        }

        if !self.terminal_margin_scale.is_finite() {
            return Err(MctsError::InvalidConfig("terminal margin scale must be finite".into()));
        }

        Ok(())
    }
}
