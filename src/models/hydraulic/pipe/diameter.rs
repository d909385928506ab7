//! Pipe diameter from a target pressure drop.
//!
//! The forward model is sampled over a range of candidate diameters and a
//! least-squares polynomial is fitted to the inverse relation.
//! The fit is done in log–log coordinates, `ln d` as a polynomial in `ln Δp`,
//! where the relation is close to a straight line (`Δp ∝ d^-5` for fully
//! rough flow).

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        f64::{Length, Pressure, VolumeRate},
        length::millimeter,
        pressure::millibar,
    },
};

use crate::support::{
    hydraulics::Medium,
    polynomial::{FitError, Polynomial, linspace},
};

use super::{PipeLayout, StraightPipe};

/// Sampling and fit settings for [`PipeLayout::diameter_by_pressure_drop`].
#[derive(Debug, Clone, Copy)]
pub struct DiameterFitConfig {
    /// Smallest sampled diameter.
    pub min_diameter: Length,

    /// Largest sampled diameter.
    pub max_diameter: Length,

    /// Number of sampled diameters, endpoints included.
    pub samples: usize,

    /// Degree of the fitted polynomial.
    pub degree: usize,
}

impl Default for DiameterFitConfig {
    fn default() -> Self {
        Self {
            min_diameter: Length::new::<millimeter>(10.0),
            max_diameter: Length::new::<millimeter>(60.0),
            samples: 100,
            degree: 2,
        }
    }
}

/// Errors that can occur while sizing a pipe by its pressure drop.
#[derive(Debug, Error)]
pub enum DiameterError {
    /// The target pressure drop is not strictly positive and finite.
    #[error("target pressure drop must be positive, got {pressure_drop:?}")]
    InvalidPressureDrop { pressure_drop: Pressure },

    /// The sampled pressure drops could not be fitted.
    #[error("diameter fit failed")]
    Fit(#[from] FitError),
}

impl PipeLayout {
    /// Estimates the diameter at which this layout produces `pressure_drop`
    /// at the given flow rate.
    ///
    /// The estimate comes from a polynomial fit over the sampled diameter
    /// range in `config`, so its accuracy depends on that range.
    /// Targets outside the sampled pressure-drop range are extrapolated and
    /// logged as a warning.
    ///
    /// # Errors
    ///
    /// - [`DiameterError::InvalidPressureDrop`] if the target is not strictly
    ///   positive.
    /// - [`DiameterError::Fit`] if the samples cannot be fitted, for example
    ///   because the flow rate is zero or there are too few samples.
    pub fn diameter_by_pressure_drop(
        &self,
        medium: &Medium,
        flow_rate: VolumeRate,
        pressure_drop: Pressure,
        config: DiameterFitConfig,
    ) -> Result<Length, DiameterError> {
        if !pressure_drop.is_finite() || pressure_drop <= Pressure::ZERO {
            return Err(DiameterError::InvalidPressureDrop { pressure_drop });
        }

        let diameters = linspace(
            config.min_diameter.get::<millimeter>(),
            config.max_diameter.get::<millimeter>(),
            config.samples,
        );

        let (ln_dp, ln_d): (Vec<f64>, Vec<f64>) = diameters
            .iter()
            .map(|&d| {
                let pipe = StraightPipe::new_unchecked(
                    Length::new::<millimeter>(d),
                    self.length(),
                    self.roughness(),
                );
                let dp = pipe.pressure_drop(medium, flow_rate).get::<millibar>();
                (dp.ln(), d.ln())
            })
            .unzip();

        let fit = Polynomial::fit(&ln_dp, &ln_d, config.degree)?;

        let target = pressure_drop.get::<millibar>().ln();
        let (lo, hi) = ln_dp
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if target < lo || target > hi {
            tracing::warn!(
                target_mbar = pressure_drop.get::<millibar>(),
                sampled_min_mbar = lo.exp(),
                sampled_max_mbar = hi.exp(),
                "diameter fit extrapolates beyond the sampled pressure drops"
            );
        }

        let diameter = fit.eval(target).exp();
        tracing::debug!(
            diameter_mm = diameter,
            degree = config.degree,
            samples = config.samples,
            "fitted pipe diameter"
        );

        Ok(Length::new::<millimeter>(diameter))
    }
}
