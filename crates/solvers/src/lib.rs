//! Quadratic equation solvers.
//!
//! Solves `ax² + bx + c = 0` by whichever of two methods applies:
//!
//! - the closed-form quadratic formula, in its numerically stable variant
//! - a Catalan-number series for the transformed equation `1 - u + A·u² = 0`,
//!   valid when `A = ac/b²` satisfies `|A| ≤ 1/4`
//!
//! [`classify`] inspects the coefficients and returns a [`MethodChoice`], and
//! [`quadratic::solve`] dispatches on it. For the common case, [`solve`]
//! takes raw coefficients and a tolerance.
//!
//! # Logging
//!
//! Solvers emit [`tracing`] events: the classification at `debug`, each
//! series term at `trace`, and series non-convergence at `warn`. No subscriber
//! is installed by this crate.

mod classify;
mod error;

pub mod quadratic;

pub use classify::{MethodChoice, SERIES_RADIUS, classify};
pub use error::Error;
pub use quadratic::{DEFAULT_TOLERANCE, Solution};

use quadcat_core::Equation;

/// Solves `ax² + bx + c = 0` to the given series tolerance.
///
/// Uses the default term cap. See [`quadratic::solve`] for full control.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tolerance` is not finite and positive.
pub fn solve(a: f64, b: f64, c: f64, tolerance: f64) -> Result<Solution, Error> {
    let config = quadratic::Config::with_tolerance(tolerance)?;
    Ok(quadratic::solve_unobserved(
        &Equation::new(a, b, c),
        &config,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::quadratic::{ConfigError, MethodKind};

    #[test]
    fn solves_series_eligible_coefficients() {
        let solution = solve(1.0, 4.0, 1.0, DEFAULT_TOLERANCE).expect("valid tolerance");

        assert_eq!(solution.kind(), MethodKind::CatalanSeries);
        assert_eq!(solution.roots.len(), 2);
        assert_relative_eq!(solution.roots[0], -0.267_949_192_4, epsilon = 1e-9);
        assert_relative_eq!(solution.roots[1], -3.732_050_807_6, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        for tolerance in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
            let result = solve(1.0, 4.0, 1.0, tolerance);
            assert!(
                matches!(result, Err(Error::InvalidConfig(ConfigError::Tolerance))),
                "tolerance {tolerance} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_tolerance_is_rejected_for_every_method() {
        // Tolerance is validated before classification.
        let result = solve(0.0, 3.0, 6.0, 0.0);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn error_message_names_the_field() {
        let error = solve(1.0, 4.0, 1.0, -1.0).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid config: tolerance must be finite and positive"
        );
    }
}
