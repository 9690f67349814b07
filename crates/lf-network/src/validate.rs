//! Network validation logic.

use crate::error::NetworkError;
use crate::network::{LoopPath, Pipe};

/// Validate pipe data: at least one pipe, all resistances finite and > 0.
pub(crate) fn validate_pipes(pipes: &[Pipe]) -> Result<(), NetworkError> {
    if pipes.is_empty() {
        return Err(NetworkError::EmptyNetwork);
    }

    for (i, pipe) in pipes.iter().enumerate() {
        if !pipe.resistance.is_finite() {
            return Err(NetworkError::NonFiniteResistance {
                pipe_index: i,
                name: pipe.name.clone(),
            });
        }
        if pipe.resistance <= 0.0 {
            return Err(NetworkError::NonPositiveResistance {
                pipe_index: i,
                name: pipe.name.clone(),
                resistance: pipe.resistance,
            });
        }
    }

    Ok(())
}

/// Validate loop incidence rows against the pipe set.
///
/// Checks row length, value range {-1, 0, 1}, and that every loop has at
/// least one member pipe.
pub(crate) fn validate_loops(pipes: &[Pipe], loops: &[LoopPath]) -> Result<(), NetworkError> {
    if loops.is_empty() {
        return Err(NetworkError::NoLoops);
    }

    let pipe_count = pipes.len();
    for (l, loop_path) in loops.iter().enumerate() {
        if loop_path.incidence.len() != pipe_count {
            return Err(NetworkError::RowLenMismatch {
                loop_index: l,
                expected: pipe_count,
                actual: loop_path.incidence.len(),
            });
        }

        let mut members = 0usize;
        for (p, &w) in loop_path.incidence.iter().enumerate() {
            if !(-1..=1).contains(&w) {
                return Err(NetworkError::BadIncidence {
                    loop_index: l,
                    pipe_index: p,
                    value: w,
                });
            }
            if w != 0 {
                members += 1;
            }
        }

        if members == 0 {
            return Err(NetworkError::EmptyLoop { loop_index: l });
        }
    }

    Ok(())
}
