use std::fmt::Debug;

#[derive(thiserror::Error, Debug)]
pub enum MctsError<E: Debug> {
    #[error("no legal actions available from the root state")]
    EmptyActionSpace,

    #[error("attempted to read the win rate of a node with zero visits")]
    DivisionByZeroStat,

    #[error("inconsistent tree state: {0}")]
    InconsistentTreeState(String),

    #[error("terminal state has no outcome for the searching player")]
    MissingOutcome,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("game rejected a transition: {0:?}")]
    Game(E),
}

pub type Result<T, E> = std::result::Result<T, MctsError<E>>;
