//! Error types for maze construction and search.

use thiserror::Error;

/// Errors raised by the search layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier was exhausted before the goal was reached. This never
    /// happens for generator-produced mazes; it indicates a disconnected,
    /// externally constructed grid.
    #[error("no solution: frontier exhausted before reaching the goal")]
    NoSolution,

    /// `remove` was called on an empty frontier. The search loop checks for
    /// emptiness first, so this is an internal precondition violation and
    /// should never escape the frontier layer in normal operation.
    #[error("remove called on an empty frontier")]
    EmptyFrontier,
}

/// Errors raised when adopting an externally constructed grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("grid rows are not all the same length")]
    Ragged,

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has more than one start cell")]
    MultipleStarts,

    #[error("grid has no goal cell")]
    MissingGoal,

    #[error("grid has more than one goal cell")]
    MultipleGoals,
}
