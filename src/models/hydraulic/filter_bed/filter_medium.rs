use uom::si::{f64::Length, length::millimeter};

use crate::support::constraint::{
    Constrained, ConstraintResult, StrictlyPositive, UnitIntervalLowerOpen, UnitIntervalOpen,
};

/// The granular material a filter bed is packed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterMedium {
    sauter_diameter: Length,
    porosity: f64,
    shape_factor: f64,
}

impl FilterMedium {
    /// Creates a filter medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the Sauter diameter is not strictly positive, the
    /// porosity is outside `(0, 1)`, or the pressure-drop shape factor is
    /// outside `(0, 1]`.
    pub fn new(
        sauter_diameter: Length,
        porosity: f64,
        shape_factor: f64,
    ) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(sauter_diameter)?,
            UnitIntervalOpen::new(porosity)?,
            UnitIntervalLowerOpen::new(shape_factor)?,
        ))
    }

    /// Creates a filter medium from pre-validated parameters.
    #[must_use]
    pub fn from_constrained(
        sauter_diameter: Constrained<Length, StrictlyPositive>,
        porosity: Constrained<f64, UnitIntervalOpen>,
        shape_factor: Constrained<f64, UnitIntervalLowerOpen>,
    ) -> Self {
        Self {
            sauter_diameter: sauter_diameter.into_inner(),
            porosity: porosity.into_inner(),
            shape_factor: shape_factor.into_inner(),
        }
    }

    /// Surface-equivalent mean grain diameter `d_p`.
    #[must_use]
    pub fn sauter_diameter(&self) -> Length {
        self.sauter_diameter
    }

    /// Void fraction `ψ` of the packed bed.
    #[must_use]
    pub fn porosity(&self) -> f64 {
        self.porosity
    }

    /// Pressure-drop shape factor `Φ_D`.
    #[must_use]
    pub fn shape_factor(&self) -> f64 {
        self.shape_factor
    }
}

/// Filter media with published parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMediumPreset {
    /// Quartz sand, 0.4 to 0.7 mm grain size.
    QuartzSand04To07,
}

impl FilterMediumPreset {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 1] = [Self::QuartzSand04To07];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::QuartzSand04To07 => "quartz sand 0.4-0.7 mm",
        }
    }

    /// Returns the medium parameters.
    #[must_use]
    pub fn medium(self) -> FilterMedium {
        match self {
            Self::QuartzSand04To07 => FilterMedium {
                sauter_diameter: Length::new::<millimeter>(0.4),
                porosity: 0.395,
                shape_factor: 0.74,
            },
        }
    }
}

impl From<FilterMediumPreset> for FilterMedium {
    fn from(preset: FilterMediumPreset) -> Self {
        preset.medium()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn presets_satisfy_constraints() {
        for preset in FilterMediumPreset::ALL {
            let medium = preset.medium();
            let checked = FilterMedium::new(
                medium.sauter_diameter(),
                medium.porosity(),
                medium.shape_factor(),
            );
            assert_eq!(checked, Ok(medium), "{}", preset.name());
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let d_p = Length::new::<millimeter>(0.4);
        assert_eq!(
            FilterMedium::new(d_p, 1.0, 0.74),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            FilterMedium::new(d_p, 0.395, 0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            FilterMedium::new(Length::new::<millimeter>(0.0), 0.395, 0.74),
            Err(ConstraintError::Zero)
        );
    }
}
