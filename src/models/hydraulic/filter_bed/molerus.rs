//! Molerus single-particle correlations for packed granular beds.
//!
//! The bed is described by its void fraction (porosity `ψ`) and the Sauter
//! diameter `d_p` of its grains. Each grain is treated as a particle in a
//! cell whose size follows from the porosity, which gives the length ratio
//! `r₀/δ`. The pressure drop follows from an Euler number that sums a
//! creeping-flow term, a boundary-layer term and a separation term.
//!
//! All functions take and return plain SI values (`m`, `m/s`, `kg/m³`,
//! `m²/s`, `Pa`) and are not guarded: a porosity of exactly zero or one
//! yields an infinite or `NaN` result.

use std::f64::consts::PI;

/// Particle Reynolds number `v·d_p/(ψ·ν)` using the interstitial velocity.
#[must_use]
pub fn reynolds_number(
    velocity: f64,
    sauter_diameter: f64,
    porosity: f64,
    kinematic_viscosity: f64,
) -> f64 {
    velocity * sauter_diameter / (porosity * kinematic_viscosity)
}

/// Ratio of the particle radius to the mean gap between particles,
/// `r₀/δ = (0.95/(1-ψ)^(1/3) - 1)^-1`.
#[must_use]
pub fn length_ratio(porosity: f64) -> f64 {
    (0.95 / (1.0 - porosity).cbrt() - 1.0).recip()
}

/// Euler number of a bed of spheres.
#[must_use]
pub fn euler_number_sphere(reynolds: f64, length_ratio: f64) -> f64 {
    let r = length_ratio;
    let creeping = 24.0 / reynolds * (1.0 + 0.692 * (r + 0.5 * r.powi(2)));
    let boundary_layer = 4.0 / reynolds.sqrt() * (1.0 + 0.12 * r.powf(1.5));
    let separation = 0.4 + 0.891 * r * reynolds.powf(-0.1);
    creeping + boundary_layer + separation
}

/// Euler number of a bed of non-spherical grains with pressure-drop shape
/// factor `Φ_D` (one for spheres).
#[must_use]
pub fn euler_number(shape_factor: f64, reynolds: f64, length_ratio: f64) -> f64 {
    let phi = shape_factor;
    let r = length_ratio;
    let creeping = 24.0 / (reynolds * phi.powi(2)) * (1.0 + 0.685 * (r + 0.5 * r.powi(2)));
    let boundary_layer = 4.0 / (reynolds.sqrt() * phi.powf(1.5)) * (1.0 + 0.289 * r.powf(1.5));
    let separation = (0.4 + 0.514 * r) / phi;
    creeping + boundary_layer + separation
}

/// Common factor `(4/3)·(d_p/L)·(ψ²/(1-ψ))` linking the Euler number to the
/// dynamic pressure.
fn bed_factor(bed_length: f64, sauter_diameter: f64, porosity: f64) -> f64 {
    4.0 / 3.0 * (sauter_diameter / bed_length) * (porosity.powi(2) / (1.0 - porosity))
}

/// Pressure drop `Eu·ρ·v² / ((4/3)·(d_p/L)·(ψ²/(1-ψ)))`.
#[must_use]
pub fn pressure_drop(
    bed_length: f64,
    velocity: f64,
    density: f64,
    sauter_diameter: f64,
    porosity: f64,
    euler_number: f64,
) -> f64 {
    euler_number * density * velocity.powi(2) / bed_factor(bed_length, sauter_diameter, porosity)
}

/// Bed length that produces `pressure_drop`.
#[must_use]
pub fn bed_length(
    pressure_drop: f64,
    velocity: f64,
    density: f64,
    sauter_diameter: f64,
    porosity: f64,
    euler_number: f64,
) -> f64 {
    4.0 / 3.0
        * (pressure_drop / (density * velocity.powi(2)))
        * sauter_diameter
        * (porosity.powi(2) / (1.0 - porosity))
        / euler_number
}

/// Euler number implied by a measured pressure drop.
#[must_use]
pub fn euler_number_from_pressure_drop(
    pressure_drop: f64,
    bed_length: f64,
    velocity: f64,
    density: f64,
    sauter_diameter: f64,
    porosity: f64,
) -> f64 {
    pressure_drop / (density * velocity.powi(2)) * bed_factor(bed_length, sauter_diameter, porosity)
}

/// Number of grains in a bed, `(1-ψ)·A·L / (π·d_p³/6)`.
#[must_use]
pub fn particle_count(
    bed_length: f64,
    cross_area: f64,
    sauter_diameter: f64,
    porosity: f64,
) -> f64 {
    (1.0 - porosity) * cross_area * bed_length / (sauter_diameter.powi(3) * PI / 6.0)
}

/// Drag coefficient of a single sphere, `24/Re + 4/√Re + 0.4`.
#[must_use]
pub fn single_particle_drag(reynolds: f64) -> f64 {
    24.0 / reynolds + 4.0 / reynolds.sqrt() + 0.4
}
