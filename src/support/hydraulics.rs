//! Shared building blocks for hydraulic pressure-drop models.
//!
//! - [`FlowComponent`]: circular flow cross-section with continuity conversions.
//! - [`FlowCondition`]: a working point given as flow rate or velocity.
//! - [`Medium`]: density and kinematic viscosity captured at one state.
//! - [`friction`]: friction factor correlations and the Darcy–Weisbach relation.
//! - [`PressureDrop`]: the single entry point every pressure-drop model exposes.

mod component;
mod flow_condition;
mod medium;

pub mod friction;

pub use component::FlowComponent;
pub use flow_condition::FlowCondition;
pub use medium::Medium;

use uom::si::f64::{DiffusionCoefficient, Pressure};

/// Kinematic viscosity `ν = μ/ρ`, in m²/s.
///
/// `uom` models this dimension as a diffusion coefficient; units live in
/// [`uom::si::diffusion_coefficient`].
pub type KinematicViscosity = DiffusionCoefficient;

/// A model that computes the pressure drop across a flow component.
///
/// Each implementor carries its own geometry and correlation.
/// Inverse calculations (flow rate or geometry from a target pressure drop)
/// are provided by the concrete models, not by this trait.
pub trait PressureDrop: FlowComponent {
    /// Error returned when the working point lies outside the model's validity range.
    type Error;

    /// Returns the pressure drop for the given medium and working point.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if a validity precondition of the model is violated.
    fn pressure_drop(&self, medium: &Medium, condition: FlowCondition)
    -> Result<Pressure, Self::Error>;
}
