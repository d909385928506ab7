//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently only
//! [`hydraulic`] exists: pressure drop through pipes, corrugated pipes,
//! and granular filter beds.
//!
//! # Model structure
//!
//! Each model is a plain value type (geometry plus validated parameters) with
//! inherent methods for the forward and inverse calculations.
//! The [`twine_core::Model`] implementation is a thin adapter,
//! [`hydraulic::PressureDropModel`], that delegates to those methods.

pub mod hydraulic;
