//! Pipe friction correlations.
//!
//! Friction factors are Darcy friction factors `λ`, so the frictional pressure
//! drop over a straight run is `Δp = λ·(L/d)·ρ·v²/2`.
//! Turbulent flow is assumed throughout; no laminar branch is provided.

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{Length, MassDensity, Pressure, Velocity},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::root_finding::DirectionSearch;

use super::KinematicViscosity;

/// Search settings for the Colebrook–White solve.
///
/// These values reproduce historical outputs exactly and should not be tuned.
pub const COLEBROOK_WHITE_SEARCH: DirectionSearch = DirectionSearch {
    initial: 0.005,
    step: 0.001,
    reversals: 7,
    max_evaluations: 10_000,
};

/// Reynolds number `v·L/ν` for a characteristic length `L`.
#[must_use]
pub fn reynolds_number(
    velocity: Velocity,
    length: Length,
    kinematic_viscosity: KinematicViscosity,
) -> f64 {
    velocity.get::<meter_per_second>() * length.get::<meter>()
        / kinematic_viscosity.get::<square_meter_per_second>()
}

/// Residual of the Colebrook–White equation,
/// `1/√λ + 2·log10(2.51/(Re·√λ) + (k/d)/3.71)`.
///
/// The residual is zero at the friction factor that satisfies the equation.
#[must_use]
pub fn colebrook_white_residual(
    friction_factor: f64,
    reynolds: f64,
    relative_roughness: f64,
) -> f64 {
    let sqrt_lambda = friction_factor.sqrt();
    1.0 / sqrt_lambda + 2.0 * (2.51 / (reynolds * sqrt_lambda) + relative_roughness / 3.71).log10()
}

/// Solves the Colebrook–White equation for the Darcy friction factor.
///
/// Uses [`COLEBROOK_WHITE_SEARCH`], so the result carries the accuracy of
/// that fixed search budget (about 1e-9 absolute for pool-scale pipes).
/// No check is made that `reynolds` is in the turbulent range. Far below it
/// (`Re` of order 1 and less) the search stops at its evaluation cap and the
/// result is not a solution of the equation.
#[must_use]
pub fn colebrook_white(reynolds: f64, relative_roughness: f64) -> f64 {
    COLEBROOK_WHITE_SEARCH
        .solve(|lambda| colebrook_white_residual(lambda, reynolds, relative_roughness))
}

/// Darcy–Weisbach pressure drop `λ·L·ρ·v²/(2·d)`.
#[must_use]
pub fn darcy_weisbach(
    friction_factor: f64,
    length: Length,
    diameter: Length,
    density: MassDensity,
    velocity: Velocity,
) -> Pressure {
    let l = length.get::<meter>();
    let d = diameter.get::<meter>();
    let rho = density.get::<kilogram_per_cubic_meter>();
    let v = velocity.get::<meter_per_second>();

    Pressure::new::<pascal>(friction_factor * l * rho * v.powi(2) / (2.0 * d))
}

/// Pressure loss coefficient `ζ = 2·Δp/(ρ·v²)`.
#[must_use]
pub fn loss_coefficient(pressure_drop: Pressure, density: MassDensity, velocity: Velocity) -> f64 {
    2.0 * pressure_drop.get::<pascal>()
        / (density.get::<kilogram_per_cubic_meter>() * velocity.get::<meter_per_second>().powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Fixed-point iteration of the Colebrook–White equation, used as a reference.
    fn colebrook_fixed_point(reynolds: f64, relative_roughness: f64) -> f64 {
        let mut lambda: f64 = 0.02;
        for _ in 0..200 {
            let rhs = -2.0 * (2.51 / (reynolds * lambda.sqrt()) + relative_roughness / 3.71).log10();
            lambda = rhs.powi(-2);
        }
        lambda
    }

    #[test]
    fn matches_converged_colebrook_white() {
        for (re, rr) in [(87_650.65, 0.05 / 45.2), (2e4, 0.0), (5e5, 1e-3), (1e6, 1e-4)] {
            let lambda = colebrook_white(re, rr);
            assert_relative_eq!(lambda, colebrook_fixed_point(re, rr), max_relative = 1e-6);
            assert!(colebrook_white_residual(lambda, re, rr).abs() < 1e-4);
        }
    }

    #[test]
    fn rougher_pipes_have_higher_friction() {
        let smooth = colebrook_white(1e5, 0.0);
        let rough = colebrook_white(1e5, 0.01);
        assert!(rough > smooth);
    }

    #[test]
    fn darcy_weisbach_and_loss_coefficient_agree() {
        let lambda = 0.0228;
        let length = Length::new::<meter>(2.6);
        let diameter = Length::new::<meter>(0.0452);
        let density = MassDensity::new::<kilogram_per_cubic_meter>(997.048);
        let velocity = Velocity::new::<meter_per_second>(1.731);

        let dp = darcy_weisbach(lambda, length, diameter, density, velocity);
        assert_relative_eq!(
            dp.get::<pascal>(),
            lambda * 2.6 * 997.048 * 1.731 * 1.731 / (2.0 * 0.0452),
            max_relative = 1e-12
        );

        // For a straight run, ζ = λ·L/d.
        assert_relative_eq!(
            loss_coefficient(dp, density, velocity),
            lambda * 2.6 / 0.0452,
            max_relative = 1e-12
        );
    }

    #[test]
    fn reynolds_number_of_water_in_pool_pipe() {
        let re = reynolds_number(
            Velocity::new::<meter_per_second>(1.731),
            Length::new::<meter>(0.0452),
            KinematicViscosity::new::<square_meter_per_second>(0.8927e-6),
        );
        assert_relative_eq!(re, 1.731 * 0.0452 / 0.8927e-6, max_relative = 1e-12);
    }
}
