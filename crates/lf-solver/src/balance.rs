//! Two-phase Hardy Cross iteration.

use crate::error::{SolverError, SolverResult};
use lf_core::{Real, ensure_finite, signed_square};
use lf_network::{LoopPath, Network};
use nalgebra::DVector;
use rayon::prelude::*;
use tracing::debug;

/// Balancer configuration.
pub struct BalanceConfig {
    /// Number of correction iterations to run.
    pub iterations: usize,
    /// Optional early exit: stop once the largest loop correction of an
    /// iteration falls below this threshold. `None` always runs the full
    /// iteration count, matching classic fixed-count Hardy Cross.
    pub tolerance: Option<Real>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            tolerance: None,
        }
    }
}

/// Balancer result.
#[derive(Clone, Debug)]
pub struct BalanceSolution {
    /// Final discharge per pipe, same indexing as the input.
    pub discharge: Vec<Real>,
    /// Iterations actually run (equals the configured count unless the
    /// tolerance early exit fired).
    pub iterations: usize,
    /// Largest loop correction magnitude in the last iteration run
    /// (0 when no iterations ran).
    pub max_correction: Real,
}

/// Balance flow in a closed-loop network with the Hardy Cross method.
///
/// Runs `config.iterations` correction sweeps. Each sweep has two phases:
///
/// 1. For every loop, compute the correction
///    `error = sum(r * q * |q| * w) / sum(2 * r * |q| * |w|)` over all
///    pipes, where `w` is the loop's signed incidence. All corrections of a
///    sweep read the same discharge snapshot; loops are independent here and
///    are evaluated in parallel.
/// 2. Apply every correction: `q[p] -= error[l] * w[l][p]`. Corrections from
///    different loops accumulate on the same pipe.
///
/// The caller's `initial_discharge` slice is never mutated; the solution
/// carries a fresh vector.
///
/// Fails with [`SolverError::DimensionMismatch`] when the initial discharge
/// length does not match the pipe count, and with
/// [`SolverError::DegenerateLoop`] when every member pipe of some loop sits
/// at zero discharge (the correction denominator vanishes).
pub fn balance(
    network: &Network,
    initial_discharge: &[Real],
    config: &BalanceConfig,
) -> SolverResult<BalanceSolution> {
    let pipe_count = network.pipe_count();
    if initial_discharge.len() != pipe_count {
        return Err(SolverError::DimensionMismatch {
            what: "initial discharge",
            expected: pipe_count,
            actual: initial_discharge.len(),
        });
    }
    for &q in initial_discharge {
        ensure_finite(q, "initial discharge")?;
    }

    let resistances = network.resistances();
    // Working copy; the input slice stays untouched.
    let mut discharge = DVector::from_column_slice(initial_discharge);
    let mut iterations_run = 0usize;
    let mut max_correction = 0.0;

    for iteration in 0..config.iterations {
        // Phase one: every loop correction reads the same snapshot.
        let errors: Vec<Real> = network
            .loops()
            .par_iter()
            .enumerate()
            .map(|(l, loop_path)| {
                loop_error(l, loop_path, &resistances, &discharge, iteration)
            })
            .collect::<SolverResult<Vec<Real>>>()?;

        // Phase two: apply all corrections; loops sharing a pipe accumulate.
        for (loop_path, &error) in network.loops().iter().zip(&errors) {
            for (p, &w) in loop_path.incidence.iter().enumerate() {
                if w != 0 {
                    discharge[p] -= error * Real::from(w);
                }
            }
        }

        iterations_run = iteration + 1;
        max_correction = errors.iter().fold(0.0, |m: Real, e| m.max(e.abs()));
        debug!(iteration, max_correction, "balancing sweep complete");

        if let Some(tolerance) = config.tolerance {
            if max_correction < tolerance {
                debug!(iteration, tolerance, "corrections below tolerance");
                break;
            }
        }
    }

    Ok(BalanceSolution {
        discharge: discharge.iter().copied().collect(),
        iterations: iterations_run,
        max_correction,
    })
}

/// Correction for one loop from the current discharge snapshot.
///
/// Numerator is the net signed head loss around the loop; denominator is the
/// derivative-based sensitivity of that head loss to a uniform flow shift.
fn loop_error(
    loop_index: usize,
    loop_path: &LoopPath,
    resistances: &[Real],
    discharge: &DVector<Real>,
    iteration: usize,
) -> SolverResult<Real> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (p, &w) in loop_path.incidence.iter().enumerate() {
        if w == 0 {
            continue;
        }
        let q = discharge[p];
        let r = resistances[p];
        numerator += r * signed_square(q) * Real::from(w);
        denominator += 2.0 * r * q.abs();
    }

    if denominator == 0.0 {
        return Err(SolverError::DegenerateLoop {
            loop_index,
            iteration,
        });
    }

    Ok(ensure_finite(numerator / denominator, "loop correction")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_network::Network;
    use proptest::prelude::*;

    fn single_loop(resistances: Vec<Real>) -> Network {
        let pipe_count = resistances.len();
        let mut row = vec![1i8; pipe_count];
        row[pipe_count - 1] = -1;
        Network::from_parts(resistances, vec![row]).unwrap()
    }

    #[test]
    fn one_sweep_matches_hand_computation() {
        // Two equal pipes, opposite orientation, q0 = [10, 0].
        // numerator = 2*100*1 + 0 = 200, denominator = 2*2*10 = 40,
        // error = 5, so q becomes [5, 5].
        let network = single_loop(vec![2.0, 2.0]);
        let config = BalanceConfig {
            iterations: 1,
            tolerance: None,
        };
        let solution = balance(&network, &[10.0, 0.0], &config).unwrap();
        assert_eq!(solution.discharge, vec![5.0, 5.0]);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.max_correction, 5.0);
    }

    #[test]
    fn non_member_pipes_are_untouched() {
        let network =
            Network::from_parts(vec![1.0, 1.0, 1.0], vec![vec![1, -1, 0]]).unwrap();
        let config = BalanceConfig {
            iterations: 1,
            tolerance: None,
        };
        let q0 = [4.0, 1.0, 7.5];
        let solution = balance(&network, &q0, &config).unwrap();

        // Pipe 2 is outside the loop.
        assert_eq!(solution.discharge[2], 7.5);
        // Member pipes move by exactly one loop correction each.
        let step0 = (solution.discharge[0] - q0[0]).abs();
        let step1 = (solution.discharge[1] - q0[1]).abs();
        assert_eq!(step0, solution.max_correction);
        assert_eq!(step1, solution.max_correction);
    }

    #[test]
    fn degenerate_loop_is_reported() {
        let network = single_loop(vec![2.0, 3.0]);
        let config = BalanceConfig::default();
        let err = balance(&network, &[0.0, 0.0], &config).unwrap_err();
        assert!(matches!(
            err,
            SolverError::DegenerateLoop {
                loop_index: 0,
                iteration: 0
            }
        ));
    }

    #[test]
    fn non_finite_initial_discharge_rejected() {
        let network = single_loop(vec![2.0, 3.0]);
        let err = balance(&network, &[Real::NAN, 1.0], &BalanceConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric(_)));
    }

    #[test]
    fn dimension_mismatch_detected_before_iterating() {
        let network = single_loop(vec![2.0, 3.0]);
        let err = balance(&network, &[1.0, 2.0, 3.0], &BalanceConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            SolverError::DimensionMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn tolerance_exits_early() {
        let network = single_loop(vec![2.0, 2.0]);
        let config = BalanceConfig {
            iterations: 50,
            tolerance: Some(1e-9),
        };
        let solution = balance(&network, &[10.0, 0.0], &config).unwrap();
        assert!(solution.iterations < 50);
        assert!(solution.max_correction < 1e-9);
    }

    proptest! {
        #[test]
        fn zero_iterations_returns_input(
            q0 in proptest::collection::vec(-50.0f64..50.0, 2..8),
        ) {
            let resistances = vec![1.5; q0.len()];
            let network = single_loop(resistances);
            let config = BalanceConfig { iterations: 0, tolerance: None };
            let solution = balance(&network, &q0, &config).unwrap();
            prop_assert_eq!(solution.discharge, q0);
            prop_assert_eq!(solution.iterations, 0);
        }

        #[test]
        fn output_shape_matches_input(
            q0 in proptest::collection::vec(1.0f64..50.0, 2..8),
            iterations in 0usize..4,
        ) {
            let resistances: Vec<Real> =
                (0..q0.len()).map(|i| 0.5 + i as Real).collect();
            let network = single_loop(resistances);
            let config = BalanceConfig { iterations, tolerance: None };
            match balance(&network, &q0, &config) {
                Ok(solution) => prop_assert_eq!(solution.discharge.len(), q0.len()),
                Err(SolverError::DegenerateLoop { .. }) => {}
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }
}
