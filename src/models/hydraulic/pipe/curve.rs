use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::millibar,
    volume_rate::liter_per_minute,
};

use crate::support::{
    hydraulics::Medium,
    polynomial::{FitError, Polynomial, linspace},
};

use super::StraightPipe;

/// Sampling and fit settings for [`StraightPipe::pressure_flow_curve`].
#[derive(Debug, Clone, Copy)]
pub struct PressureFlowCurveConfig {
    /// Number of sampled flow rates, endpoints included.
    pub samples: usize,

    /// Degree of the fitted polynomial.
    pub degree: usize,
}

impl Default for PressureFlowCurveConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            degree: 4,
        }
    }
}

/// A fitted pipe characteristic mapping pressure drop to flow rate.
///
/// Internally the polynomial maps millibar to litres per minute, which keeps
/// the coefficients well scaled for pool-sized pipework.
/// Evaluation outside the sampled flow range is an extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureFlowCurve {
    polynomial: Polynomial,
}

impl PressureFlowCurve {
    /// Returns the flow rate the curve predicts for a pressure drop.
    #[must_use]
    pub fn flow_rate(&self, pressure_drop: Pressure) -> VolumeRate {
        VolumeRate::new::<liter_per_minute>(
            self.polynomial.eval(pressure_drop.get::<millibar>()),
        )
    }

    /// Returns the underlying polynomial (millibar in, litres per minute out).
    #[must_use]
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }
}

impl StraightPipe {
    /// Samples the pressure drop over `[start, end]` and fits a curve giving
    /// flow rate as a function of pressure drop.
    ///
    /// Composite networks use the curve to split flow between parallel
    /// branches without re-solving each branch.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] if the samples cannot be fitted, for example
    /// when `config.samples` does not exceed `config.degree`.
    pub fn pressure_flow_curve(
        &self,
        medium: &Medium,
        start: VolumeRate,
        end: VolumeRate,
        config: PressureFlowCurveConfig,
    ) -> Result<PressureFlowCurve, FitError> {
        let flow_rates = linspace(
            start.get::<liter_per_minute>(),
            end.get::<liter_per_minute>(),
            config.samples,
        );

        let pressure_drops: Vec<f64> = flow_rates
            .iter()
            .map(|&q| {
                self.pressure_drop(medium, VolumeRate::new::<liter_per_minute>(q))
                    .get::<millibar>()
            })
            .collect();

        let polynomial = Polynomial::fit(&pressure_drops, &flow_rates, config.degree)?;

        Ok(PressureFlowCurve { polynomial })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::models::hydraulic::test_support::{m3h, pool_pipe, water_25c};

    #[test]
    fn curve_tracks_forward_model() {
        let pipe = pool_pipe();
        let water = water_25c();

        let curve = pipe
            .pressure_flow_curve(
                &water,
                m3h(5.0),
                m3h(15.0),
                PressureFlowCurveConfig::default(),
            )
            .unwrap();
        assert_eq!(curve.polynomial().degree(), 4);

        for q in [6.0, 10.0, 14.0] {
            let dp = pipe.pressure_drop(&water, m3h(q));
            assert_abs_diff_eq!(
                curve.flow_rate(dp).get::<liter_per_minute>(),
                m3h(q).get::<liter_per_minute>(),
                epsilon = 0.5
            );
        }
    }

    #[test]
    fn too_few_samples() {
        let result = pool_pipe().pressure_flow_curve(
            &water_25c(),
            m3h(5.0),
            m3h(15.0),
            PressureFlowCurveConfig {
                samples: 4,
                degree: 4,
            },
        );
        assert_eq!(
            result,
            Err(FitError::TooFewSamples {
                degree: 4,
                samples: 4
            })
        );
    }
}
