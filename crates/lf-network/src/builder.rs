//! Incremental network builder.

use lf_core::{LoopId, PipeId, Real};

use crate::error::{NetworkError, NetworkResult};
use crate::network::{LoopPath, Network, Pipe};
use crate::validate;

/// Orientation of a pipe relative to a loop's traversal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Flow reference direction matches the loop traversal (+1).
    Aligned,
    /// Flow reference direction opposes the loop traversal (-1).
    Opposed,
}

impl Orientation {
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Aligned => 1,
            Orientation::Opposed => -1,
        }
    }
}

/// Builder for constructing a network incrementally.
///
/// Use `add_pipe` and `add_loop` to build up the network,
/// then call `build()` to validate and freeze it into an immutable `Network`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    pipes: Vec<Pipe>,
    loop_members: Vec<Vec<(PipeId, Orientation)>>,
    next_pipe_id: u32,
    next_loop_id: u32,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pipe with the given friction resistance and return its ID.
    pub fn add_pipe(&mut self, name: impl Into<String>, resistance: Real) -> PipeId {
        let id = PipeId::from_index(self.next_pipe_id);
        self.next_pipe_id += 1;
        self.pipes.push(Pipe {
            id,
            name: name.into(),
            resistance,
        });
        id
    }

    /// Add a closed loop as a list of member pipes with orientations.
    ///
    /// Membership is expanded into a full signed incidence row over all
    /// pipes when `build()` runs. Returns the loop ID.
    pub fn add_loop(
        &mut self,
        members: impl IntoIterator<Item = (PipeId, Orientation)>,
    ) -> LoopId {
        let id = LoopId::from_index(self.next_loop_id);
        self.next_loop_id += 1;
        self.loop_members.push(members.into_iter().collect());
        id
    }

    /// Rename a pipe (useful for post-construction adjustments).
    pub fn rename_pipe(&mut self, pipe_id: PipeId, new_name: impl Into<String>) {
        if let Some(pipe) = self.pipes.get_mut(pipe_id.index() as usize) {
            pipe.name = new_name.into();
        }
    }

    /// Build and validate the network, returning an immutable `Network`.
    ///
    /// Expands loop membership lists into incidence rows, then validates
    /// pipes and loops. Duplicate or out-of-range pipe references inside a
    /// loop are reported here.
    pub fn build(self) -> NetworkResult<Network> {
        let pipe_count = self.pipes.len();
        let mut loops = Vec::with_capacity(self.loop_members.len());

        for (l, members) in self.loop_members.iter().enumerate() {
            let mut incidence = vec![0i8; pipe_count];
            for &(pipe_id, orientation) in members {
                let p = pipe_id.index() as usize;
                if p >= pipe_count {
                    return Err(NetworkError::InvalidPipeRef {
                        loop_index: l,
                        pipe_index: p,
                        pipe_count,
                    });
                }
                if incidence[p] != 0 {
                    return Err(NetworkError::DuplicatePipe {
                        loop_index: l,
                        pipe_index: p,
                    });
                }
                incidence[p] = orientation.sign();
            }
            loops.push(LoopPath {
                id: LoopId::from_index(l as u32),
                incidence,
            });
        }

        validate::validate_pipes(&self.pipes)?;
        validate::validate_loops(&self.pipes, &loops)?;

        Ok(Network {
            pipes: self.pipes,
            loops,
        })
    }
}
