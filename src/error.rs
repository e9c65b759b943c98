use thiserror::Error;

use crate::graphs::Distance;

/// Errors raised while building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("negative edge weight {weight} is not supported")]
    NegativeWeightEdge { weight: i64 },

    #[error("unable to parse line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors raised by shortest path queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("source vertex is not part of the graph")]
    UnknownSourceVertex,

    #[error("predecessor chain does not reach the source within {steps} steps")]
    CorruptPredecessorChain { steps: usize },
}

/// Reasons a path does not describe a walk through a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathValidationError {
    #[error("path is empty")]
    Empty,

    #[error("no edge between path positions {index} and {}", .index + 1)]
    MissingEdge { index: usize },

    #[error("path claims distance {claimed} but its edges sum to {actual}")]
    WrongDistance { claimed: Distance, actual: Distance },
}
