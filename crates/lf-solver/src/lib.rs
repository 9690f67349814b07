//! Hardy Cross flow balancer for closed-loop pipe networks.
//!
//! This crate iteratively corrects a per-pipe discharge vector so that the
//! net head loss around every closed loop approaches zero. Each iteration
//! computes one correction per loop from a snapshot of the discharge vector
//! (the loop-error phase), then applies all corrections at once (the update
//! phase). The two phases never interleave; that ordering is what makes the
//! corrections consistent with each other.

pub mod balance;
pub mod error;
pub mod fixtures;

pub use balance::{BalanceConfig, BalanceSolution, balance};
pub use error::{SolverError, SolverResult};
