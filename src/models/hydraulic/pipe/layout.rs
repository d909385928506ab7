use uom::si::f64::Length;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

use super::StraightPipe;

/// A pipe run whose diameter is not yet chosen.
///
/// The layout fixes length and wall roughness.
/// It is the starting point for sizing a pipe by its pressure drop; see
/// [`PipeLayout::diameter_by_pressure_drop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeLayout {
    length: Length,
    roughness: Length,
}

impl PipeLayout {
    /// Creates a pipe layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not strictly positive or the
    /// roughness is negative.
    pub fn new(length: Length, roughness: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(length)?,
            NonNegative::new(roughness)?,
        ))
    }

    /// Creates a pipe layout from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        length: Constrained<Length, StrictlyPositive>,
        roughness: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            length: length.into_inner(),
            roughness: roughness.into_inner(),
        }
    }

    pub(super) fn new_unchecked(length: Length, roughness: Length) -> Self {
        Self { length, roughness }
    }

    /// Returns the pipe length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the absolute wall roughness.
    #[must_use]
    pub fn roughness(&self) -> Length {
        self.roughness
    }

    /// Completes the layout with a diameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is not strictly positive.
    pub fn with_diameter(&self, diameter: Length) -> ConstraintResult<StraightPipe> {
        Ok(self.with_constrained_diameter(StrictlyPositive::new(diameter)?))
    }

    /// Completes the layout with a pre-validated diameter.
    #[must_use]
    pub fn with_constrained_diameter(
        &self,
        diameter: Constrained<Length, StrictlyPositive>,
    ) -> StraightPipe {
        StraightPipe::new_unchecked(diameter.into_inner(), self.length, self.roughness)
    }
}
