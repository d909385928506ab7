//! Least-squares polynomial fitting and evaluation.
//!
//! Polynomials are stored with coefficients in ascending order of power,
//! so `coefficients[i]` multiplies `x^i`.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Errors that can occur while fitting a polynomial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The `x` and `y` samples have different lengths.
    #[error("sample length mismatch: {x_len} x values, {y_len} y values")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// There are not enough samples to determine every coefficient.
    #[error("degree {degree} fit needs more than {degree} samples, got {samples}")]
    TooFewSamples { degree: usize, samples: usize },

    /// A sample is `NaN` or infinite.
    #[error("sample {index} is not finite")]
    NonFinite { index: usize },

    /// The least-squares system could not be solved.
    #[error("least-squares solve failed: {0}")]
    Solve(&'static str),
}

/// A polynomial in one variable.
///
/// # Example
///
/// ```
/// use twine_hydraulics::support::polynomial::Polynomial;
///
/// // 1 + 2x + 3x²
/// let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(p.eval(2.0), 17.0);
/// assert_eq!(p.degree(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending order of power.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Fits a polynomial of the given degree to `(x, y)` samples by linear least squares.
    ///
    /// The Vandermonde system is solved through a singular value decomposition.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] if the sample slices differ in length, hold fewer
    /// than `degree + 1` points, contain non-finite values, or the system
    /// cannot be solved.
    pub fn fit(x: &[f64], y: &[f64], degree: usize) -> Result<Self, FitError> {
        if x.len() != y.len() {
            return Err(FitError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        if x.len() <= degree {
            return Err(FitError::TooFewSamples {
                degree,
                samples: x.len(),
            });
        }

        if let Some(index) = x
            .iter()
            .zip(y)
            .position(|(xi, yi)| !xi.is_finite() || !yi.is_finite())
        {
            return Err(FitError::NonFinite { index });
        }

        let mut vandermonde = DMatrix::<f64>::zeros(x.len(), degree + 1);
        for (row, &xi) in x.iter().enumerate() {
            let mut power = 1.0;
            for col in 0..=degree {
                vandermonde[(row, col)] = power;
                power *= xi;
            }
        }
        let rhs = DVector::from_column_slice(y);

        let solution = vandermonde
            .svd(true, true)
            .solve(&rhs, f64::EPSILON)
            .map_err(FitError::Solve)?;

        tracing::debug!(degree, samples = x.len(), "fitted polynomial");

        Ok(Self::new(solution.iter().copied().collect()))
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns the coefficients in ascending order of power.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the nominal degree (number of coefficients minus one).
    ///
    /// Leading zero coefficients are not trimmed.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// Returns `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// A `count` of one yields `[start]` and a `count` of zero yields an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let intervals = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + (end - start) * (i as f64) / intervals
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn recovers_exact_quadratic() {
        let x = linspace(-3.0, 5.0, 20);
        let y: Vec<f64> = x.iter().map(|x| 0.5 - 1.5 * x + 2.0 * x * x).collect();

        let p = Polynomial::fit(&x, &y, 2).unwrap();

        assert_eq!(p.degree(), 2);
        assert_relative_eq!(p.coefficients()[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(p.coefficients()[1], -1.5, epsilon = 1e-9);
        assert_relative_eq!(p.coefficients()[2], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn least_squares_line_through_noisy_points() {
        // Normal equations by hand: slope = Sxy / Sxx = 9 / 5, intercept = 4 - 1.8 * 1.5.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.5, 2.5, 5.5, 6.5];

        let p = Polynomial::fit(&x, &y, 1).unwrap();

        assert_relative_eq!(p.coefficients()[0], 1.3, epsilon = 1e-9);
        assert_relative_eq!(p.coefficients()[1], 1.8, epsilon = 1e-9);
    }

    #[test]
    fn quartic_fit_over_wide_range() {
        let x = linspace(5.0, 50.0, 100);
        let y: Vec<f64> = x.iter().map(|x| 40.0 * x.sqrt()).collect();

        let p = Polynomial::fit(&x, &y, 4).unwrap();

        for &xi in &[6.0, 20.0, 37.5, 49.0] {
            assert_relative_eq!(p.eval(xi), 40.0 * f64::sqrt(xi), max_relative = 5e-3);
        }
    }

    #[test]
    fn rejects_bad_samples() {
        assert_eq!(
            Polynomial::fit(&[1.0, 2.0], &[1.0], 1),
            Err(FitError::LengthMismatch { x_len: 2, y_len: 1 })
        );
        assert_eq!(
            Polynomial::fit(&[1.0, 2.0], &[1.0, 2.0], 2),
            Err(FitError::TooFewSamples {
                degree: 2,
                samples: 2
            })
        );
        assert_eq!(
            Polynomial::fit(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0], 1),
            Err(FitError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn horner_matches_power_sum() {
        let p = Polynomial::new(vec![2.0, -1.0, 0.0, 0.25]);
        let x: f64 = 1.7;
        assert_relative_eq!(p.eval(x), 2.0 - x + 0.25 * x.powi(3), epsilon = 1e-12);
    }

    #[test]
    fn empty_polynomial_is_zero() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.eval(3.0), 0.0);
        assert_eq!(p.degree(), 0);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let values = linspace(10.0, 60.0, 100);
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 10.0);
        assert_eq!(values[99], 60.0);
        assert_relative_eq!(values[1] - values[0], 50.0 / 99.0, epsilon = 1e-12);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }
}
