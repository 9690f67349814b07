//! Error types for network construction and loading.

use lf_core::Real;
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors raised while building, validating, or loading a network.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Network has no pipes")]
    EmptyNetwork,

    #[error("Network has no loops")]
    NoLoops,

    #[error("Pipe {pipe_index} ({name}): resistance must be strictly positive, got {resistance}")]
    NonPositiveResistance {
        pipe_index: usize,
        name: String,
        resistance: Real,
    },

    #[error("Pipe {pipe_index} ({name}): resistance is not finite")]
    NonFiniteResistance { pipe_index: usize, name: String },

    #[error(
        "Loop {loop_index}: incidence row has length {actual}, expected pipe count {expected}"
    )]
    RowLenMismatch {
        loop_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Loop {loop_index}, pipe {pipe_index}: incidence value {value} is outside {{-1, 0, 1}}")]
    BadIncidence {
        loop_index: usize,
        pipe_index: usize,
        value: i8,
    },

    #[error("Loop {loop_index} has no member pipes")]
    EmptyLoop { loop_index: usize },

    #[error("Loop {loop_index} references pipe {pipe_index} more than once")]
    DuplicatePipe {
        loop_index: usize,
        pipe_index: usize,
    },

    #[error("Loop {loop_index} references pipe index {pipe_index}, but only {pipe_count} pipes exist")]
    InvalidPipeRef {
        loop_index: usize,
        pipe_index: usize,
        pipe_count: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
