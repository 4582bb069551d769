use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

/// When a decision stops iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Iterations(usize),
    /// Wall-clock limit checked before each iteration.
    Millis(u64),
}

#[derive(Debug)]
pub struct Termination {
    budget: Budget,
    started: Instant,
    iterations: usize,
}

impl Termination {
    pub fn start(budget: Budget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            iterations: 0,
        }
    }

    pub fn should_continue(&self) -> bool {
        match self.budget {
            Budget::Iterations(limit) => self.iterations < limit,
            // a timed search always gets at least one sample
            Budget::Millis(limit) => self.iterations == 0 || self.started.elapsed() < Duration::from_millis(limit),
        }
    }

    pub fn record_iteration(&mut self) {
        self.iterations += 1;
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
