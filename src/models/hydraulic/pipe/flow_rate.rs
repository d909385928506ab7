//! Flow rate from a target pressure drop.
//!
//! Two solvers are provided. The direction search reproduces historical
//! outputs and never reports whether it converged. The bracketed solver uses
//! bisection with explicit tolerances and fails if it does not converge.

mod config;
mod error;
mod problem;

pub use config::BracketedFlowRateConfig;
pub use error::FlowRateError;

use std::cmp::Ordering;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Pressure, VolumeRate},
        pressure::pascal,
        volume_rate::cubic_meter_per_hour,
    },
};

use crate::support::{hydraulics::Medium, root_finding::DirectionSearch};

use super::StraightPipe;

use problem::{FlowRateModel, FlowRateProblem};

/// Search settings for [`StraightPipe::flow_rate_by_pressure_drop`].
///
/// The search variable is the flow rate in m³/h.
/// These values reproduce historical outputs exactly and should not be tuned.
pub const FLOW_RATE_SEARCH: DirectionSearch = DirectionSearch {
    initial: 8.5,
    step: 0.05,
    reversals: 7,
    max_evaluations: 10_000,
};

/// Validates a target pressure drop.
///
/// Returns `Ok(true)` for a zero target, which needs no solve.
fn check_target(pressure_drop: Pressure) -> Result<bool, FlowRateError> {
    match pressure_drop.partial_cmp(&Pressure::ZERO) {
        Some(Ordering::Equal) => Ok(true),
        Some(Ordering::Greater) => Ok(false),
        Some(Ordering::Less) | None => Err(FlowRateError::InvalidPressureDrop { pressure_drop }),
    }
}

impl StraightPipe {
    /// Finds the flow rate that produces `pressure_drop`, using the historical
    /// fixed-budget direction search ([`FLOW_RATE_SEARCH`]).
    ///
    /// A zero target returns exactly zero flow.
    /// The result is the last search iterate; no convergence check is made.
    /// Targets whose flow rate is below one search step (0.05 m³/h) are
    /// reached by stepping through zero and back.
    /// Use [`StraightPipe::flow_rate_by_pressure_drop_bracketed`] when a
    /// convergence guarantee is needed.
    ///
    /// # Errors
    ///
    /// Returns [`FlowRateError::InvalidPressureDrop`] if the target is negative
    /// or not a number.
    pub fn flow_rate_by_pressure_drop(
        &self,
        medium: &Medium,
        pressure_drop: Pressure,
    ) -> Result<VolumeRate, FlowRateError> {
        if check_target(pressure_drop)? {
            return Ok(VolumeRate::ZERO);
        }

        let target = pressure_drop.get::<pascal>();
        let flow_rate = FLOW_RATE_SEARCH.solve(|q| {
            // Reverse flow gives a pressure rise, so the residual stays
            // monotonic when the search steps below zero.
            let achieved = self
                .pressure_drop(medium, VolumeRate::new::<cubic_meter_per_hour>(q.abs()))
                .get::<pascal>();
            target - achieved.copysign(q)
        });

        Ok(VolumeRate::new::<cubic_meter_per_hour>(flow_rate))
    }

    /// Finds the flow rate that produces `pressure_drop` by bisection over
    /// `[0, config.max_flow_rate]`.
    ///
    /// A zero target returns exactly zero flow.
    ///
    /// # Errors
    ///
    /// - [`FlowRateError::InvalidPressureDrop`] if the target is negative or
    ///   not a number.
    /// - [`FlowRateError::AboveBracket`] if even the maximum flow rate does
    ///   not reach the target.
    /// - [`FlowRateError::MaxIters`] if the solver stops at its iteration
    ///   limit without converging.
    /// - [`FlowRateError::Bisection`] if the solver itself fails.
    pub fn flow_rate_by_pressure_drop_bracketed(
        &self,
        medium: &Medium,
        pressure_drop: Pressure,
        config: BracketedFlowRateConfig,
    ) -> Result<VolumeRate, FlowRateError> {
        if check_target(pressure_drop)? {
            return Ok(VolumeRate::ZERO);
        }

        let max_pressure_drop = self.pressure_drop(medium, config.max_flow_rate);
        if pressure_drop > max_pressure_drop {
            return Err(FlowRateError::AboveBracket {
                pressure_drop,
                max_flow_rate: config.max_flow_rate,
                max_pressure_drop,
            });
        }

        let model = FlowRateModel::new(self, medium);
        let problem = FlowRateProblem::new(pressure_drop);

        let solution = bisection::solve(
            &model,
            &problem,
            config.bracket(),
            &config.bisection(),
            |event: &bisection::Event<'_, _, _>| {
                // A non-finite pressure drop means the trial flow rate left the
                // usable range of the correlation. Treat it as lying below the
                // solution so the bracket moves toward higher flow.
                if event.result().is_err() {
                    return Some(bisection::Action::assume_positive());
                }
                None
            },
        )?;

        if solution.status != bisection::Status::Converged {
            tracing::warn!(
                residual_pa = solution.residual,
                iters = solution.iters,
                "bracketed flow-rate solve hit its iteration limit"
            );
            return Err(FlowRateError::MaxIters {
                residual: Pressure::new::<pascal>(solution.residual),
                iters: solution.iters,
            });
        }

        let flow_rate = solution.snapshot.output.flow_rate;
        tracing::debug!(
            flow_rate_m3h = flow_rate.get::<cubic_meter_per_hour>(),
            residual_pa = solution.residual,
            iters = solution.iters,
            "bracketed flow-rate solve converged"
        );

        Ok(flow_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use uom::si::{f64::Length, length::meter};

    use crate::models::hydraulic::test_support::{m3h, mm, pool_pipe, water_25c};

    fn pa(value: f64) -> Pressure {
        Pressure::new::<pascal>(value)
    }

    fn pipe_2_6m(diameter_mm: f64, roughness_mm: f64) -> StraightPipe {
        StraightPipe::new(mm(diameter_mm), Length::new::<meter>(2.6), mm(roughness_mm)).unwrap()
    }

    #[test]
    fn recovers_pool_pipe_flow_rate() {
        let pipe = pool_pipe();
        let water = water_25c();

        let q = pipe.flow_rate_by_pressure_drop(&water, pa(1958.3)).unwrap();

        assert_abs_diff_eq!(q.get::<cubic_meter_per_hour>(), 9.9984, epsilon = 1e-3);
    }

    #[test]
    fn direction_search_round_trips_across_range() {
        let pipe = pool_pipe();
        let water = water_25c();

        // Low targets need a long walk down from the starting guess; high
        // targets sit far above it.
        for target in [1.0, 100.0, 1958.3, 50_000.0] {
            let q = pipe.flow_rate_by_pressure_drop(&water, pa(target)).unwrap();
            let achieved = pipe.pressure_drop(&water, q);
            assert_relative_eq!(achieved.get::<pascal>(), target, max_relative = 1e-5);
        }
    }

    #[test]
    fn direction_search_handles_edge_geometries() {
        let water = water_25c();

        // Smallest and largest sampled diameters, and a hydraulically smooth pipe.
        for pipe in [pipe_2_6m(10.0, 0.05), pipe_2_6m(60.0, 0.05), pipe_2_6m(45.2, 0.0)] {
            for target in [1.0, 1000.0] {
                let q = pipe.flow_rate_by_pressure_drop(&water, pa(target)).unwrap();
                let achieved = pipe.pressure_drop(&water, q);
                assert_relative_eq!(achieved.get::<pascal>(), target, max_relative = 1e-4);
            }
        }
    }

    #[test]
    fn direction_search_finds_flow_below_one_step() {
        let pipe = pipe_2_6m(10.0, 0.05);
        let water = water_25c();

        // The root lies below the first step of 0.05 m³/h, so the walk passes
        // through zero flow and comes back.
        let legacy = pipe.flow_rate_by_pressure_drop(&water, pa(1.0)).unwrap();
        let q = legacy.get::<cubic_meter_per_hour>();
        assert!(q > 0.0 && q < FLOW_RATE_SEARCH.step, "q = {q}");

        let bracketed = pipe
            .flow_rate_by_pressure_drop_bracketed(
                &water,
                pa(1.0),
                BracketedFlowRateConfig::default(),
            )
            .unwrap();
        assert_relative_eq!(
            q,
            bracketed.get::<cubic_meter_per_hour>(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn zero_target_gives_exactly_zero_flow() {
        let pipe = pool_pipe();
        let water = water_25c();

        let legacy = pipe.flow_rate_by_pressure_drop(&water, Pressure::ZERO).unwrap();
        let bracketed = pipe
            .flow_rate_by_pressure_drop_bracketed(
                &water,
                Pressure::ZERO,
                BracketedFlowRateConfig::default(),
            )
            .unwrap();

        assert_eq!(legacy, VolumeRate::ZERO);
        assert_eq!(bracketed, VolumeRate::ZERO);
    }

    #[test]
    fn rejects_negative_and_nan_targets() {
        let pipe = pool_pipe();
        let water = water_25c();

        assert!(matches!(
            pipe.flow_rate_by_pressure_drop(&water, pa(-1.0)),
            Err(FlowRateError::InvalidPressureDrop { .. })
        ));
        assert!(matches!(
            pipe.flow_rate_by_pressure_drop_bracketed(
                &water,
                pa(f64::NAN),
                BracketedFlowRateConfig::default()
            ),
            Err(FlowRateError::InvalidPressureDrop { .. })
        ));
    }

    #[test]
    fn bracketed_agrees_with_forward_model() {
        let pipe = pool_pipe();
        let water = water_25c();
        let target = pipe.pressure_drop(&water, m3h(10.0));

        let q = pipe
            .flow_rate_by_pressure_drop_bracketed(
                &water,
                target,
                BracketedFlowRateConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(q.get::<cubic_meter_per_hour>(), 10.0, max_relative = 1e-6);
    }

    #[test]
    fn bracketed_and_direction_search_agree() {
        let pipe = pool_pipe();
        let water = water_25c();

        for target in [1.0, 500.0, 5000.0] {
            let legacy = pipe.flow_rate_by_pressure_drop(&water, pa(target)).unwrap();
            let bracketed = pipe
                .flow_rate_by_pressure_drop_bracketed(
                    &water,
                    pa(target),
                    BracketedFlowRateConfig::default(),
                )
                .unwrap();
            assert_relative_eq!(
                legacy.get::<cubic_meter_per_hour>(),
                bracketed.get::<cubic_meter_per_hour>(),
                max_relative = 1e-5
            );
        }
    }

    #[test]
    fn bracketed_rejects_target_above_bracket() {
        let pipe = pool_pipe();
        let water = water_25c();

        // Reaching 2 bar needs about 107 m³/h, above the default bracket.
        let result = pipe.flow_rate_by_pressure_drop_bracketed(
            &water,
            pa(200_000.0),
            BracketedFlowRateConfig::default(),
        );

        assert!(matches!(result, Err(FlowRateError::AboveBracket { .. })));
    }

    #[test]
    fn bracketed_reports_iteration_limit() {
        let pipe = pool_pipe();
        let water = water_25c();

        let config = BracketedFlowRateConfig {
            max_iters: 2,
            ..BracketedFlowRateConfig::default()
        };
        let result = pipe.flow_rate_by_pressure_drop_bracketed(&water, pa(1958.3), config);

        assert!(matches!(result, Err(FlowRateError::MaxIters { .. })));
    }
}
