//! Corrugated pipes and hoses.
//!
//! The friction factor comes from an empirical power law in the corrugation
//! geometry, `λ = 0.2·(h/d)^0.6·(l/h)^0.7`, with lengths in millimetres.
//! The correlation is only valid for turbulent flow (`Re ≥ 50 000`) and wave
//! ratios `0 ≤ h/l ≤ 1.2`; outside that range the calculation fails rather
//! than clamping.

use thiserror::Error;
use uom::si::{
    f64::{Length, Pressure, Velocity},
    length::millimeter,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    hydraulics::{
        FlowComponent, FlowCondition, Medium, PressureDrop,
        friction::{darcy_weisbach, reynolds_number},
    },
};

use super::pipe::StraightPipe;

/// Smallest Reynolds number for which the correlation holds.
pub const MIN_REYNOLDS: f64 = 50_000.0;

/// Largest wave ratio `h/l` for which the correlation holds.
pub const MAX_WAVE_RATIO: f64 = 1.2;

/// Errors that can occur while working with corrugated pipes.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CorrugatedPipeError {
    /// The flow is below the turbulent range of the correlation.
    #[error("Reynolds number {reynolds} is below the required {minimum}")]
    NotTurbulent { reynolds: f64, minimum: f64 },

    /// The wave height to wave distance ratio is outside `[0, 1.2]`.
    #[error("wave ratio h/l = {ratio} is outside [0, 1.2]")]
    WaveRatio { ratio: f64 },

    /// A corrugation dimension violates its constraint.
    #[error("invalid corrugation geometry")]
    Geometry(#[from] ConstraintError),
}

/// The wall profile of a corrugated pipe.
///
/// # Example
///
/// ```
/// use twine_hydraulics::models::hydraulic::corrugated_pipe::Corrugation;
/// use uom::si::{f64::Length, length::millimeter};
///
/// let mm = Length::new::<millimeter>;
///
/// // The inner wave space defaults to half the wave distance.
/// let wave = Corrugation::new(mm(3.0), mm(6.0), None)?;
/// assert_eq!(wave.inner_wave_space(), mm(3.0));
///
/// // Waves taller than 1.2 times their spacing are rejected.
/// assert!(Corrugation::new(mm(8.0), mm(6.0), None).is_err());
/// # Ok::<(), twine_hydraulics::models::hydraulic::corrugated_pipe::CorrugatedPipeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corrugation {
    wave_height: Length,
    wave_distance: Length,
    inner_wave_space: Length,
}

impl Corrugation {
    /// Creates a corrugation profile.
    ///
    /// `inner_wave_space` is the width of the gap between two corrugations on
    /// the inside of the pipe; it defaults to half the wave distance.
    ///
    /// A wave height of zero passes validation, matching the closed ratio
    /// range, but the power law then evaluates `0·∞`. The pressure drop of
    /// such a pipe is `NaN` and is returned as is.
    ///
    /// # Errors
    ///
    /// - [`CorrugatedPipeError::Geometry`] if the wave height is negative or
    ///   the wave distance or inner wave space is not strictly positive.
    /// - [`CorrugatedPipeError::WaveRatio`] if `h/l` is outside `[0, 1.2]`.
    pub fn new(
        wave_height: Length,
        wave_distance: Length,
        inner_wave_space: Option<Length>,
    ) -> Result<Self, CorrugatedPipeError> {
        let wave_height = NonNegative::new(wave_height)?.into_inner();
        let wave_distance = StrictlyPositive::new(wave_distance)?.into_inner();
        let inner_wave_space = match inner_wave_space {
            Some(space) => StrictlyPositive::new(space)?.into_inner(),
            None => wave_distance / 2.0,
        };

        let corrugation = Self::new_unchecked(wave_height, wave_distance, inner_wave_space);
        corrugation.check_wave_ratio()?;
        Ok(corrugation)
    }

    /// Creates a corrugation profile without validation.
    ///
    /// An out-of-range wave ratio is still reported when the pressure drop
    /// is calculated.
    #[must_use]
    pub fn new_unchecked(
        wave_height: Length,
        wave_distance: Length,
        inner_wave_space: Length,
    ) -> Self {
        Self {
            wave_height,
            wave_distance,
            inner_wave_space,
        }
    }

    #[must_use]
    pub fn wave_height(&self) -> Length {
        self.wave_height
    }

    #[must_use]
    pub fn wave_distance(&self) -> Length {
        self.wave_distance
    }

    #[must_use]
    pub fn inner_wave_space(&self) -> Length {
        self.inner_wave_space
    }

    /// Wave ratio `h/l`.
    #[must_use]
    pub fn wave_ratio(&self) -> f64 {
        self.wave_height.get::<millimeter>() / self.wave_distance.get::<millimeter>()
    }

    fn check_wave_ratio(&self) -> Result<(), CorrugatedPipeError> {
        let ratio = self.wave_ratio();
        if (0.0..=MAX_WAVE_RATIO).contains(&ratio) {
            Ok(())
        } else {
            Err(CorrugatedPipeError::WaveRatio { ratio })
        }
    }
}

/// Friction factors from four corrugated-pipe correlations.
///
/// Only [`power_law`](Self::power_law) is used for pressure drop.
/// The others are kept for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrictionFactors {
    /// `0.2·(h/d)^0.6·(l/h)^0.7`.
    pub power_law: f64,

    /// `-0.25 / ln(k·√(d·l/(h·b)))`.
    pub natural_log: f64,

    /// `-0.25 / log10(k·√(d·l/(h·b)))`.
    pub log10: f64,

    /// Nikuradse's fully rough pipe, with the wave height as roughness:
    /// `(-2·log10(h/(3.71·d)))^-2`.
    pub nikuradse: f64,
}

/// A straight pipe run with a corrugated wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrugatedPipe {
    pipe: StraightPipe,
    corrugation: Corrugation,
}

impl CorrugatedPipe {
    #[must_use]
    pub fn new(pipe: StraightPipe, corrugation: Corrugation) -> Self {
        Self { pipe, corrugation }
    }

    /// Returns the underlying pipe dimensions.
    #[must_use]
    pub fn pipe(&self) -> &StraightPipe {
        &self.pipe
    }

    #[must_use]
    pub fn corrugation(&self) -> &Corrugation {
        &self.corrugation
    }

    /// Checks the validity range and returns the flow velocity.
    fn check(
        &self,
        medium: &Medium,
        condition: FlowCondition,
    ) -> Result<Velocity, CorrugatedPipeError> {
        let velocity = condition.velocity(self);
        let reynolds = reynolds_number(velocity, self.diameter(), medium.kinematic_viscosity());
        if reynolds < MIN_REYNOLDS {
            return Err(CorrugatedPipeError::NotTurbulent {
                reynolds,
                minimum: MIN_REYNOLDS,
            });
        }
        self.corrugation.check_wave_ratio()?;
        Ok(velocity)
    }

    /// Power-law friction factor `0.2·(h/d)^0.6·(l/h)^0.7`.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not turbulent or the wave ratio is
    /// out of range.
    pub fn friction_factor(
        &self,
        medium: &Medium,
        condition: impl Into<FlowCondition>,
    ) -> Result<f64, CorrugatedPipeError> {
        self.check(medium, condition.into())?;
        Ok(self.power_law())
    }

    fn power_law(&self) -> f64 {
        let d = self.diameter().get::<millimeter>();
        let h = self.corrugation.wave_height.get::<millimeter>();
        let l = self.corrugation.wave_distance.get::<millimeter>();
        0.2 * (h / d).powf(0.6) * (l / h).powf(0.7)
    }

    /// Evaluates all four friction factor correlations at a working point.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not turbulent or the wave ratio is
    /// out of range.
    pub fn reference_friction_factors(
        &self,
        medium: &Medium,
        condition: impl Into<FlowCondition>,
    ) -> Result<ReferenceFrictionFactors, CorrugatedPipeError> {
        self.check(medium, condition.into())?;

        let d = self.diameter().get::<millimeter>();
        let k = self.pipe.roughness().get::<millimeter>();
        let h = self.corrugation.wave_height.get::<millimeter>();
        let l = self.corrugation.wave_distance.get::<millimeter>();
        let b = self.corrugation.inner_wave_space.get::<millimeter>();

        let log_arg = k * (d * l / (h * b)).sqrt();

        Ok(ReferenceFrictionFactors {
            power_law: self.power_law(),
            natural_log: -0.25 / log_arg.ln(),
            log10: -0.25 / log_arg.log10(),
            nikuradse: (-2.0 * (h / (3.71 * d)).log10()).powi(-2),
        })
    }

    /// Frictional pressure drop `λ·L·ρ·v²/(2·d)` with the power-law friction factor.
    ///
    /// # Errors
    ///
    /// - [`CorrugatedPipeError::NotTurbulent`] if `Re < 50 000`.
    /// - [`CorrugatedPipeError::WaveRatio`] if `h/l` is outside `[0, 1.2]`.
    pub fn pressure_drop(
        &self,
        medium: &Medium,
        condition: impl Into<FlowCondition>,
    ) -> Result<Pressure, CorrugatedPipeError> {
        let velocity = self.check(medium, condition.into())?;
        Ok(darcy_weisbach(
            self.power_law(),
            self.pipe.length(),
            self.diameter(),
            medium.density(),
            velocity,
        ))
    }
}

impl FlowComponent for CorrugatedPipe {
    fn diameter(&self) -> Length {
        self.pipe.diameter()
    }
}

impl PressureDrop for CorrugatedPipe {
    type Error = CorrugatedPipeError;

    fn pressure_drop(
        &self,
        medium: &Medium,
        condition: FlowCondition,
    ) -> Result<Pressure, Self::Error> {
        CorrugatedPipe::pressure_drop(self, medium, condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        diffusion_coefficient::square_meter_per_second,
        f64::MassDensity,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        pressure::{millibar, pascal},
        velocity::meter_per_second,
    };

    use crate::support::hydraulics::KinematicViscosity;

    use crate::models::hydraulic::test_support::{corrugated_hose, m3h, mm, water_25c};

    #[test]
    fn hose_fixtures() {
        let water = water_25c();

        for (h, l, expected_mbar) in [(3.0, 6.0, 36.23), (4.0, 8.0, 43.05), (2.5, 5.0, 32.47)] {
            let dp = corrugated_hose(h, l).pressure_drop(&water, m3h(5.0)).unwrap();
            assert_abs_diff_eq!(dp.get::<millibar>(), expected_mbar, epsilon = 0.01);
        }
    }

    #[test]
    fn reference_correlations() {
        let factors = corrugated_hose(3.0, 6.0)
            .reference_friction_factors(&water_25c(), m3h(5.0))
            .unwrap();

        assert_relative_eq!(factors.power_law, 0.070_819_6, max_relative = 1e-5);
        assert_relative_eq!(factors.natural_log, 0.181_203, max_relative = 1e-5);
        assert_relative_eq!(factors.log10, 0.417_234, max_relative = 1e-5);
        assert_relative_eq!(factors.nikuradse, 0.089_422_9, max_relative = 1e-5);
    }

    #[test]
    fn low_flow_is_not_turbulent() {
        let result = corrugated_hose(3.0, 6.0).pressure_drop(&water_25c(), m3h(1.0));
        assert!(matches!(
            result,
            Err(CorrugatedPipeError::NotTurbulent { reynolds, .. }) if reynolds < MIN_REYNOLDS
        ));
    }

    #[test]
    fn reynolds_limit_is_inclusive() {
        let hose = CorrugatedPipe::new(
            StraightPipe::new(
                Length::new::<meter>(0.04),
                Length::new::<meter>(2.6),
                mm(0.05),
            )
            .unwrap(),
            Corrugation::new(mm(3.0), mm(6.0), None).unwrap(),
        );
        let medium = Medium::new(
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            KinematicViscosity::new::<square_meter_per_second>(8e-7),
        )
        .unwrap();
        let at_limit = Velocity::new::<meter_per_second>(1.0);

        assert_eq!(
            reynolds_number(at_limit, hose.diameter(), medium.kinematic_viscosity()),
            MIN_REYNOLDS
        );
        assert!(hose.pressure_drop(&medium, at_limit).is_ok());
        assert!(matches!(
            hose.pressure_drop(&medium, Velocity::new::<meter_per_second>(0.999_99)),
            Err(CorrugatedPipeError::NotTurbulent { .. })
        ));
    }

    #[test]
    fn tall_waves_are_rejected() {
        assert!(matches!(
            Corrugation::new(mm(7.5), mm(6.0), None),
            Err(CorrugatedPipeError::WaveRatio { ratio }) if (ratio - 1.25).abs() < 1e-12
        ));

        // An unchecked profile is still caught at calculation time.
        let hose = CorrugatedPipe::new(
            *corrugated_hose(3.0, 6.0).pipe(),
            Corrugation::new_unchecked(mm(7.5), mm(6.0), mm(3.0)),
        );
        assert!(matches!(
            hose.pressure_drop(&water_25c(), m3h(5.0)),
            Err(CorrugatedPipeError::WaveRatio { .. })
        ));
    }

    #[test]
    fn ratio_limit_is_inclusive() {
        assert!(Corrugation::new(mm(6.0), mm(5.0), None).is_ok());
        assert!(Corrugation::new(mm(0.0), mm(6.0), None).is_ok());
    }

    #[test]
    fn flat_wall_gives_nan_pressure_drop() {
        let dp = corrugated_hose(0.0, 6.0)
            .pressure_drop(&water_25c(), m3h(5.0))
            .unwrap();
        assert!(dp.get::<pascal>().is_nan());
    }

    #[test]
    fn invalid_geometry() {
        assert!(matches!(
            Corrugation::new(mm(3.0), mm(0.0), None),
            Err(CorrugatedPipeError::Geometry(ConstraintError::Zero))
        ));
        assert!(matches!(
            Corrugation::new(mm(-1.0), mm(6.0), None),
            Err(CorrugatedPipeError::Geometry(ConstraintError::Negative))
        ));
    }
}
