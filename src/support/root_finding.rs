//! Damped direction search for scalar residuals.
//!
//! [`DirectionSearch`] walks a single variable with a signed step and shrinks
//! and reverses the step whenever the residual stops improving.
//! The search stops after a fixed number of reversals rather than at a
//! residual tolerance, so repeated calls with the same residual always cost
//! the same number of evaluations.
//!
//! # Convergence
//!
//! The search never checks a residual tolerance and never reports whether it
//! converged. It returns the last iterate after the reversal budget is spent.
//! With a non-monotonic residual it may settle on the wrong branch.
//!
//! The reversal budget alone does not bound the cost: a residual that keeps
//! shrinking toward a distant root never triggers a reversal. Every search
//! therefore also carries a hard evaluation cap. Hitting the cap returns the
//! current iterate, which is not a converged value either.
//! Callers that need a convergence guarantee should use a bracketed solver
//! such as [`twine_solvers::equation::bisection`] instead.

use std::cmp::Ordering;

/// Fixed-budget damped direction search.
///
/// Each iteration evaluates the residual at `x`.
/// If its magnitude did not decrease compared to the previous evaluation,
/// the step is divided by `-10` and one reversal is consumed.
/// Then `x` advances by the (possibly updated) step.
/// The loop ends when no reversals remain or after `max_evaluations`
/// evaluations, whichever comes first.
///
/// # Example
///
/// ```
/// use twine_hydraulics::support::root_finding::DirectionSearch;
///
/// let search = DirectionSearch {
///     initial: 1.0,
///     step: 0.5,
///     reversals: 12,
///     max_evaluations: 1_000,
/// };
///
/// let root = search.solve(|x| x * x - 2.0);
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionSearch {
    /// Starting value of the search variable.
    pub initial: f64,

    /// Initial signed step.
    pub step: f64,

    /// Number of step reversals before the search stops.
    pub reversals: u32,

    /// Hard limit on residual evaluations.
    pub max_evaluations: usize,
}

impl DirectionSearch {
    /// Runs the search and returns the final value of the search variable.
    ///
    /// A residual of `NaN` counts as "no improvement", which consumes a
    /// reversal. This keeps the evaluation count bounded even when the
    /// residual leaves its domain (e.g., the square root of a negative
    /// friction factor).
    pub fn solve(&self, mut residual: impl FnMut(f64) -> f64) -> f64 {
        let mut x = self.initial;
        let mut step = self.step;
        let mut remaining = self.reversals;
        let mut evaluations = 0_usize;
        let mut error = f64::MAX;

        while remaining > 0 && evaluations < self.max_evaluations {
            let last_error = error;
            error = residual(x);
            evaluations += 1;

            if error.abs().partial_cmp(&last_error.abs()) != Some(Ordering::Less) {
                step /= -10.0;
                remaining -= 1;
            }
            x += step;
        }

        if remaining > 0 {
            tracing::warn!(
                x,
                last_residual = error,
                evaluations,
                "direction search hit its evaluation limit"
            );
        } else {
            tracing::debug!(x, last_residual = error, evaluations, "direction search finished");
        }

        x
    }
}
