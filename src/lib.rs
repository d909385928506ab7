//! # Twine Hydraulics
//!
//! Pressure-drop models for plumbing components, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Pressure-drop models for straight pipes, corrugated pipes,
//!   and granular filter beds, plus a [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts next to the model that needs it and moves to
//! [`support`] once more than one model uses it.
//!
//! ## Units
//!
//! Every public quantity is a [`uom`] type. Empirical correlations defined on
//! particular scales (millimetres, m³/h, millibar) convert at their boundary.

pub mod models;
pub mod support;
