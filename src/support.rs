//! Crate-level utilities shared by the hydraulic models.
//!
//! - [`constraint`]: numeric invariants checked at construction.
//! - [`hydraulics`]: flow components, media, and friction correlations.
//! - [`polynomial`]: least-squares polynomial fitting.
//! - [`root_finding`]: the fixed-budget direction search.

pub mod constraint;
pub mod hydraulics;
pub mod polynomial;
pub mod root_finding;
