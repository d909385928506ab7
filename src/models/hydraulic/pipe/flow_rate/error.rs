use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Pressure, VolumeRate};

/// Errors that can occur while solving for a flow rate from a pressure drop.
#[derive(Debug, Error)]
pub enum FlowRateError {
    /// The target pressure drop is negative or not a number.
    #[error("target pressure drop must be non-negative, got {pressure_drop:?}")]
    InvalidPressureDrop { pressure_drop: Pressure },

    /// The target lies above the pressure drop at the top of the bracket.
    #[error("target pressure drop {pressure_drop:?} exceeds the bracket maximum {max_pressure_drop:?}")]
    AboveBracket {
        pressure_drop: Pressure,
        max_flow_rate: VolumeRate,
        max_pressure_drop: Pressure,
    },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best pressure-drop residual achieved (target - achieved).
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// The pipe produced a non-finite pressure drop at a trial flow rate.
#[derive(Debug, Clone, Copy, Error)]
#[error("non-finite pressure drop at flow rate {flow_rate:?}")]
pub(super) struct NonFinitePressureDrop {
    pub(super) flow_rate: VolumeRate,
}
