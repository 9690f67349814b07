//! Immutable network data structures.

use lf_core::{LoopId, PipeId, Real};

use crate::error::NetworkResult;
use crate::validate;

/// A pipe in the network.
///
/// `resistance` is the friction coefficient: head loss across the pipe is
/// `resistance * q * |q|` for discharge `q`.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub id: PipeId,
    pub name: String,
    pub resistance: Real,
}

/// A closed loop of pipes, stored as a signed incidence row over all pipes.
///
/// `incidence[p]` is +1 if pipe `p` is traversed in the loop's chosen
/// direction, -1 if opposed, 0 if the pipe is not part of this loop.
#[derive(Clone, Debug)]
pub struct LoopPath {
    pub id: LoopId,
    pub incidence: Vec<i8>,
}

impl LoopPath {
    /// Pipe indices that participate in this loop (non-zero incidence).
    pub fn member_pipes(&self) -> impl Iterator<Item = usize> + '_ {
        self.incidence
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(p, _)| p)
    }
}

/// An immutable, validated pipe network: pipes plus the full `L x P`
/// loop-incidence matrix.
///
/// Construct through [`crate::NetworkBuilder`] or [`Network::from_parts`];
/// both validate before freezing, so a `Network` value always satisfies the
/// model invariants (positive finite resistances, incidence in {-1, 0, 1},
/// consistent row lengths, no empty loops).
#[derive(Clone, Debug)]
pub struct Network {
    pub(crate) pipes: Vec<Pipe>,
    pub(crate) loops: Vec<LoopPath>,
}

impl Network {
    /// Build a network directly from raw resistance and incidence data.
    ///
    /// Pipes are named by index. This is the entry point used by the file
    /// schema; prefer [`crate::NetworkBuilder`] when constructing in code.
    pub fn from_parts(resistances: Vec<Real>, incidence: Vec<Vec<i8>>) -> NetworkResult<Self> {
        let pipes: Vec<Pipe> = resistances
            .into_iter()
            .enumerate()
            .map(|(i, r)| Pipe {
                id: PipeId::from_index(i as u32),
                name: format!("pipe{i}"),
                resistance: r,
            })
            .collect();
        let loops: Vec<LoopPath> = incidence
            .into_iter()
            .enumerate()
            .map(|(l, row)| LoopPath {
                id: LoopId::from_index(l as u32),
                incidence: row,
            })
            .collect();

        validate::validate_pipes(&pipes)?;
        validate::validate_loops(&pipes, &loops)?;

        Ok(Self { pipes, loops })
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn loops(&self) -> &[LoopPath] {
        &self.loops
    }

    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// Resistance of each pipe, in pipe index order.
    pub fn resistances(&self) -> Vec<Real> {
        self.pipes.iter().map(|p| p.resistance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn from_parts_valid() {
        let network =
            Network::from_parts(vec![2.0, 3.0], vec![vec![1, -1]]).unwrap();
        assert_eq!(network.pipe_count(), 2);
        assert_eq!(network.loop_count(), 1);
        assert_eq!(network.resistances(), vec![2.0, 3.0]);
    }

    #[test]
    fn from_parts_rejects_bad_row_length() {
        let err = Network::from_parts(vec![2.0, 3.0], vec![vec![1, -1, 0]]).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::RowLenMismatch {
                loop_index: 0,
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn member_pipes_skips_zero_entries() {
        let network =
            Network::from_parts(vec![1.0, 1.0, 1.0], vec![vec![1, 0, -1]]).unwrap();
        let members: Vec<usize> = network.loops()[0].member_pipes().collect();
        assert_eq!(members, vec![0, 2]);
    }
}
