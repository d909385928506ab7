use uom::si::f64::{DynamicViscosity, MassDensity};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::KinematicViscosity;

/// Fluid properties at a single working state.
///
/// A `Medium` is a snapshot: density and kinematic viscosity evaluated once
/// at a given temperature and pressure by whatever property model the caller
/// uses. Models only read it.
///
/// # Example
///
/// ```
/// use twine_hydraulics::support::hydraulics::{KinematicViscosity, Medium};
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second,
///     f64::MassDensity,
///     mass_density::kilogram_per_cubic_meter,
/// };
///
/// // Water at 25 °C and 1 atm.
/// let water = Medium::new(
///     MassDensity::new::<kilogram_per_cubic_meter>(997.048),
///     KinematicViscosity::new::<square_meter_per_second>(0.8927e-6),
/// )?;
/// # Ok::<(), twine_hydraulics::support::constraint::ConstraintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    density: MassDensity,
    kinematic_viscosity: KinematicViscosity,
}

impl Medium {
    /// Creates a medium snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if either property is not strictly positive.
    pub fn new(
        density: MassDensity,
        kinematic_viscosity: KinematicViscosity,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(density)?,
            StrictlyPositive::new(kinematic_viscosity)?,
        ))
    }

    /// Creates a medium snapshot from density and dynamic viscosity, `ν = μ/ρ`.
    ///
    /// # Errors
    ///
    /// Returns an error if either property is not strictly positive.
    pub fn from_dynamic_viscosity(
        density: MassDensity,
        dynamic_viscosity: DynamicViscosity,
    ) -> ConstraintResult<Self> {
        let density = StrictlyPositive::new(density)?;
        let dynamic_viscosity = StrictlyPositive::new(dynamic_viscosity)?.into_inner();
        let kinematic_viscosity: KinematicViscosity = dynamic_viscosity / *density.as_ref();
        Ok(Self::from_constrained(
            density,
            StrictlyPositive::new(kinematic_viscosity)?,
        ))
    }

    /// Creates a medium snapshot from pre-validated properties.
    #[must_use]
    pub fn from_constrained(
        density: Constrained<MassDensity, StrictlyPositive>,
        kinematic_viscosity: Constrained<KinematicViscosity, StrictlyPositive>,
    ) -> Self {
        Self {
            density: density.into_inner(),
            kinematic_viscosity: kinematic_viscosity.into_inner(),
        }
    }

    /// Returns the density.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Returns the kinematic viscosity.
    #[must_use]
    pub fn kinematic_viscosity(&self) -> KinematicViscosity {
        self.kinematic_viscosity
    }
}
