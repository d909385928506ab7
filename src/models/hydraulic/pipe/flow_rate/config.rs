use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume_rate::cubic_meter_per_hour,
};

/// Solver configuration for the bracketed flow-rate inversion.
///
/// The search variable is the flow rate in m³/h, bracketed by
/// `[0, max_flow_rate]`.
#[derive(Debug, Clone, Copy)]
pub struct BracketedFlowRateConfig {
    /// Upper end of the flow-rate bracket.
    pub max_flow_rate: VolumeRate,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the flow rate.
    pub flow_rate_tol: VolumeRate,

    /// Absolute tolerance on the pressure-drop residual (target - achieved).
    pub pressure_drop_tol: Pressure,
}

impl Default for BracketedFlowRateConfig {
    fn default() -> Self {
        Self {
            max_flow_rate: VolumeRate::new::<cubic_meter_per_hour>(100.0),
            max_iters: 100,
            flow_rate_tol: VolumeRate::new::<cubic_meter_per_hour>(1e-9),
            pressure_drop_tol: Pressure::new::<pascal>(1e-6),
        }
    }
}

impl BracketedFlowRateConfig {
    /// Returns the bisection bracket in m³/h.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [0.0, self.max_flow_rate.get::<cubic_meter_per_hour>()]
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.flow_rate_tol.get::<cubic_meter_per_hour>(),
            x_rel_tol: 0.0,
            residual_tol: self.pressure_drop_tol.get::<pascal>(),
        }
    }
}
