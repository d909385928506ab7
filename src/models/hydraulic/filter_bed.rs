//! Packed granular filter beds.
//!
//! The pressure drop follows the Molerus single-particle approach: a chain of
//! closed-form correlations from the particle Reynolds number through the
//! Euler number to the pressure drop. No iteration is involved, and the
//! inverse calculations (bed length, Euler number from a measured pressure
//! drop) are algebraic rearrangements.

mod filter_medium;
pub mod molerus;

pub use filter_medium::{FilterMedium, FilterMediumPreset};

use std::convert::Infallible;

use uom::si::{
    area::square_meter,
    diffusion_coefficient::square_meter_per_second,
    f64::{Length, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    hydraulics::{FlowComponent, FlowCondition, Medium, PressureDrop},
};

/// A cylindrical vessel packed with a granular filter medium, flowed through
/// along its axis.
///
/// # Example
///
/// ```
/// use twine_hydraulics::{
///     models::hydraulic::filter_bed::{FilterBed, FilterMediumPreset},
///     support::hydraulics::{KinematicViscosity, Medium},
/// };
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second,
///     f64::{Length, MassDensity, VolumeRate},
///     length::millimeter,
///     mass_density::kilogram_per_cubic_meter,
///     pressure::millibar,
///     volume_rate::cubic_meter_per_hour,
/// };
///
/// let filter = FilterBed::new(
///     Length::new::<millimeter>(500.0),
///     Length::new::<millimeter>(263.0),
///     FilterMediumPreset::QuartzSand04To07.into(),
/// )?;
/// let water = Medium::new(
///     MassDensity::new::<kilogram_per_cubic_meter>(997.048),
///     KinematicViscosity::new::<square_meter_per_second>(0.8927e-6),
/// )?;
///
/// let dp = filter.pressure_drop(&water, VolumeRate::new::<cubic_meter_per_hour>(5.8));
/// assert!((dp.get::<millibar>() - 200.0).abs() < 10.0);
/// # Ok::<(), twine_hydraulics::support::constraint::ConstraintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterBed {
    diameter: Length,
    height: Length,
    medium: FilterMedium,
}

impl FilterBed {
    /// Creates a filter bed.
    ///
    /// # Errors
    ///
    /// Returns an error if the vessel diameter or bed height is not strictly
    /// positive.
    pub fn new(diameter: Length, height: Length, medium: FilterMedium) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(diameter)?,
            StrictlyPositive::new(height)?,
            medium,
        ))
    }

    /// Creates a filter bed from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        diameter: Constrained<Length, StrictlyPositive>,
        height: Constrained<Length, StrictlyPositive>,
        medium: FilterMedium,
    ) -> Self {
        Self {
            diameter: diameter.into_inner(),
            height: height.into_inner(),
            medium,
        }
    }

    /// Height of the packed bed, which is the flow length.
    #[must_use]
    pub fn height(&self) -> Length {
        self.height
    }

    #[must_use]
    pub fn medium(&self) -> &FilterMedium {
        &self.medium
    }

    fn superficial_velocity(&self, condition: impl Into<FlowCondition>) -> f64 {
        condition.into().velocity(self).get::<meter_per_second>()
    }

    /// Particle Reynolds number `v·d_p/(ψ·ν)`.
    #[must_use]
    pub fn reynolds_number(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> f64 {
        molerus::reynolds_number(
            self.superficial_velocity(condition),
            self.medium.sauter_diameter().get::<meter>(),
            self.medium.porosity(),
            medium.kinematic_viscosity().get::<square_meter_per_second>(),
        )
    }

    /// Shape-corrected Euler number at a working point.
    #[must_use]
    pub fn euler_number(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> f64 {
        molerus::euler_number(
            self.medium.shape_factor(),
            self.reynolds_number(medium, condition),
            molerus::length_ratio(self.medium.porosity()),
        )
    }

    /// Pressure drop across the bed.
    #[must_use]
    pub fn pressure_drop(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> Pressure {
        let condition = condition.into();
        let dp = molerus::pressure_drop(
            self.height.get::<meter>(),
            self.superficial_velocity(condition),
            medium.density().get::<kilogram_per_cubic_meter>(),
            self.medium.sauter_diameter().get::<meter>(),
            self.medium.porosity(),
            self.euler_number(medium, condition),
        );
        Pressure::new::<pascal>(dp)
    }

    /// Bed height at which this vessel and medium produce `pressure_drop`
    /// at the given working point.
    #[must_use]
    pub fn bed_length_for_pressure_drop(
        &self,
        medium: &Medium,
        condition: impl Into<FlowCondition>,
        pressure_drop: Pressure,
    ) -> Length {
        let condition = condition.into();
        let length = molerus::bed_length(
            pressure_drop.get::<pascal>(),
            self.superficial_velocity(condition),
            medium.density().get::<kilogram_per_cubic_meter>(),
            self.medium.sauter_diameter().get::<meter>(),
            self.medium.porosity(),
            self.euler_number(medium, condition),
        );
        Length::new::<meter>(length)
    }

    /// Euler number implied by a measured pressure drop across this bed.
    #[must_use]
    pub fn euler_number_from_pressure_drop(
        &self,
        medium: &Medium,
        condition: impl Into<FlowCondition>,
        pressure_drop: Pressure,
    ) -> f64 {
        molerus::euler_number_from_pressure_drop(
            pressure_drop.get::<pascal>(),
            self.height.get::<meter>(),
            self.superficial_velocity(condition),
            medium.density().get::<kilogram_per_cubic_meter>(),
            self.medium.sauter_diameter().get::<meter>(),
            self.medium.porosity(),
        )
    }

    /// Approximate number of grains in the bed.
    #[must_use]
    pub fn particle_count(&self) -> f64 {
        molerus::particle_count(
            self.height.get::<meter>(),
            self.cross_area().get::<square_meter>(),
            self.medium.sauter_diameter().get::<meter>(),
            self.medium.porosity(),
        )
    }

    /// Superficial (empty-vessel) velocity for a working point.
    #[must_use]
    pub fn velocity(&self, condition: impl Into<FlowCondition>) -> Velocity {
        condition.into().velocity(self)
    }
}

impl FlowComponent for FilterBed {
    fn diameter(&self) -> Length {
        self.diameter
    }
}

impl PressureDrop for FilterBed {
    type Error = Infallible;

    fn pressure_drop(
        &self,
        medium: &Medium,
        condition: FlowCondition,
    ) -> Result<Pressure, Self::Error> {
        Ok(FilterBed::pressure_drop(self, medium, condition))
    }
}
