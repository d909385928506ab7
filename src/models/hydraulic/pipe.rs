//! Straight pipe runs.
//!
//! The forward calculation is Darcy–Weisbach with a Colebrook–White friction
//! factor. Three inverse calculations build on it:
//!
//! - flow rate from a target pressure drop, by the historical direction search
//!   ([`StraightPipe::flow_rate_by_pressure_drop`]) or by bracketed bisection
//!   with a convergence check
//!   ([`StraightPipe::flow_rate_by_pressure_drop_bracketed`]);
//! - diameter from a target pressure drop, by sampling and a polynomial fit
//!   ([`PipeLayout::diameter_by_pressure_drop`]);
//! - a pressure–flow characteristic curve ([`StraightPipe::pressure_flow_curve`]).

mod curve;
mod diameter;
mod flow_rate;
mod layout;

pub use curve::{PressureFlowCurve, PressureFlowCurveConfig};
pub use diameter::{DiameterError, DiameterFitConfig};
pub use flow_rate::{BracketedFlowRateConfig, FLOW_RATE_SEARCH, FlowRateError};
pub use layout::PipeLayout;

use std::convert::Infallible;

use uom::si::{
    f64::{Length, Pressure, Velocity},
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    hydraulics::{
        FlowComponent, FlowCondition, Medium, PressureDrop,
        friction::{colebrook_white, darcy_weisbach, loss_coefficient, reynolds_number},
    },
};

/// A straight pipe segment with a uniform circular cross-section.
///
/// # Example
///
/// ```
/// use twine_hydraulics::models::hydraulic::pipe::StraightPipe;
/// use uom::si::{f64::Length, length::{meter, millimeter}};
///
/// let pipe = StraightPipe::new(
///     Length::new::<millimeter>(45.2),
///     Length::new::<meter>(2.6),
///     Length::new::<millimeter>(0.05),
/// )?;
/// assert!((pipe.relative_roughness() - 0.05 / 45.2).abs() < 1e-15);
/// # Ok::<(), twine_hydraulics::support::constraint::ConstraintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightPipe {
    diameter: Length,
    length: Length,
    roughness: Length,
}

impl StraightPipe {
    /// Creates a pipe segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter or length is not strictly positive,
    /// or if the roughness is negative.
    pub fn new(diameter: Length, length: Length, roughness: Length) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(diameter)?,
            StrictlyPositive::new(length)?,
            NonNegative::new(roughness)?,
        ))
    }

    /// Creates a pipe segment from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        diameter: Constrained<Length, StrictlyPositive>,
        length: Constrained<Length, StrictlyPositive>,
        roughness: Constrained<Length, NonNegative>,
    ) -> Self {
        Self {
            diameter: diameter.into_inner(),
            length: length.into_inner(),
            roughness: roughness.into_inner(),
        }
    }

    /// Creates a pipe segment without validating its dimensions.
    ///
    /// Zero or negative dimensions are not rejected; they propagate into
    /// results as infinities or `NaN`.
    #[must_use]
    pub fn new_unchecked(diameter: Length, length: Length, roughness: Length) -> Self {
        Self {
            diameter,
            length,
            roughness,
        }
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

    /// Returns the pipe length and roughness without the diameter.
    #[must_use]
    pub fn layout(&self) -> PipeLayout {
        PipeLayout::new_unchecked(self.length, self.roughness)
    }

    /// Relative roughness `k/d`.
    #[must_use]
    pub fn relative_roughness(&self) -> f64 {
        (self.roughness / self.diameter).get::<ratio>()
    }

    /// Reynolds number `v·d/ν` for a mean velocity in this pipe.
    #[must_use]
    pub fn reynolds_number(&self, medium: &Medium, velocity: Velocity) -> f64 {
        reynolds_number(velocity, self.diameter, medium.kinematic_viscosity())
    }

    /// Colebrook–White friction factor at the given working point.
    ///
    /// Turbulent flow is assumed; the Reynolds number is not range-checked.
    #[must_use]
    pub fn friction_factor(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> f64 {
        let velocity = condition.into().velocity(self);
        colebrook_white(
            self.reynolds_number(medium, velocity),
            self.relative_roughness(),
        )
    }

    /// Frictional pressure drop `λ·L·ρ·v²/(2·d)`.
    ///
    /// Turbulent flow is assumed.
    #[must_use]
    pub fn pressure_drop(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> Pressure {
        let velocity = condition.into().velocity(self);
        let lambda = self.friction_factor(medium, velocity);
        darcy_weisbach(
            lambda,
            self.length,
            self.diameter,
            medium.density(),
            velocity,
        )
    }

    /// Pressure loss coefficient `ζ = 2·Δp/(ρ·v²)` at the given working point.
    ///
    /// For a straight run this equals `λ·L/d`.
    #[must_use]
    pub fn loss_coefficient(&self, medium: &Medium, condition: impl Into<FlowCondition>) -> f64 {
        let velocity = condition.into().velocity(self);
        let dp = self.pressure_drop(medium, velocity);
        loss_coefficient(dp, medium.density(), velocity)
    }
}

impl FlowComponent for StraightPipe {
    fn diameter(&self) -> Length {
        self.diameter
    }
}

impl PressureDrop for StraightPipe {
    type Error = Infallible;

    fn pressure_drop(
        &self,
        medium: &Medium,
        condition: FlowCondition,
    ) -> Result<Pressure, Self::Error> {
        Ok(StraightPipe::pressure_drop(self, medium, condition))
    }
}
