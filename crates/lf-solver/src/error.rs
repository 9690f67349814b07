//! Error types for solver operations.

use lf_core::error::CoreError;
use lf_network::NetworkError;
use thiserror::Error;

/// Errors that can occur while balancing a network.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Dimension mismatch: {what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Degenerate loop {loop_index} at iteration {iteration}: zero flow in every member pipe"
    )]
    DegenerateLoop {
        loop_index: usize,
        iteration: usize,
    },

    #[error("Numeric error: {0}")]
    Numeric(#[from] CoreError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

pub type SolverResult<T> = Result<T, SolverError>;
