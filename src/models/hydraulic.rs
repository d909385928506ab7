//! Hydraulic pressure-drop models.
//!
//! Three flow components are provided, each with its own correlation:
//!
//! - [`pipe::StraightPipe`]: Darcy–Weisbach with a Colebrook–White friction factor.
//! - [`corrugated_pipe::CorrugatedPipe`]: an empirical power-law friction factor
//!   for corrugated hose.
//! - [`filter_bed::FilterBed`]: the Molerus single-particle approach for
//!   packed granular beds.
//!
//! All three implement [`PressureDrop`](crate::support::hydraulics::PressureDrop),
//! so any of them can be wrapped in a [`PressureDropModel`] and used as a
//! [`twine_core::Model`].
//!
//! Turbulent flow is assumed throughout.

pub mod corrugated_pipe;
pub mod filter_bed;
pub mod pipe;

mod model;

#[cfg(test)]
mod test_support;

pub use model::{OperatingPoint, PressureDropModel};
