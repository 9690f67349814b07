//! Built-in reference network.

use lf_core::Real;
use lf_network::Network;

/// Iteration count the reference grid is normally run for.
pub const REFERENCE_ITERATIONS: usize = 100;

/// Resistances of the 23-pipe reference distribution grid.
pub const REFERENCE_RESISTANCES: [Real; 23] = [
    2.0, 3.0, 2.0, 3.0, 3.0, 3.0, 2.0, 2.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 3.0, 2.0, 3.0, 3.0,
    3.0, 3.0, 2.0, 3.0, 2.0,
];

/// Initial discharge guess for the reference grid.
pub const REFERENCE_INITIAL_DISCHARGE: [Real; 23] = [
    5.0, 35.0, 40.0, 5.0, 23.0, 40.0, 10.0, 20.0, 2.0, 22.0, 30.0, 30.0, 10.0, 10.0, 10.0, 20.0,
    20.0, 30.0, 30.0, 20.0, 40.0, 30.0, 30.0,
];

// Each row is one closed loop, traversed clockwise: +1 where the pipe's
// reference direction follows the traversal, -1 where it opposes it.
const REFERENCE_LOOPS: [[i8; 23]; 12] = [
    [1, -1, 0, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 1, -1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, -1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -1, -1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 1, -1],
];

/// The 23-pipe, 12-loop distribution grid used as the canonical end-to-end
/// regression fixture (run for [`REFERENCE_ITERATIONS`] sweeps).
pub fn reference_network() -> Network {
    let incidence = REFERENCE_LOOPS.iter().map(|row| row.to_vec()).collect();
    Network::from_parts(REFERENCE_RESISTANCES.to_vec(), incidence)
        .expect("reference grid data is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_grid_is_valid() {
        let network = reference_network();
        assert_eq!(network.pipe_count(), 23);
        assert_eq!(network.loop_count(), 12);
    }
}
