//! Quadratic solver with method selection.
//!
//! # Methods
//!
//! - **Linear** — `a == 0`. One root `-c/b`, or a [`Degenerate`] marker when
//!   `b == 0` as well.
//! - **Quadratic formula** — `b == 0` or `|ac/b²| > 1/4`. Uses the stable
//!   variant that avoids cancellation when `|b|` dominates.
//! - **Catalan series** — `|ac/b²| ≤ 1/4`. Sums `Σ C(n)·Aⁿ` until a bound on
//!   the remaining terms, carried into both roots, drops below the configured
//!   tolerance, or the term cap is reached. The reported error is the last
//!   successive difference of partial sums.
//!
//! The choice is made by [`classify`](crate::classify) and consumed here.
//! Coefficients are first divided by their largest magnitude, which leaves the
//! roots unchanged and keeps `b²` and `4ac` finite.
//!
//! # Observer Events
//!
//! The series method emits one [`Event`] per term. Observers can return
//! [`Action::StopEarly`] to end summation, in which case the partial result is
//! reported with [`Status::StoppedByObserver`]. The other methods emit no
//! events.
//!
//! # Non-convergence
//!
//! When the term cap is reached the best partial result is returned with
//! [`Status::MaxTerms`], and [`Solution::is_converged`] returns `false`.

mod action;
mod config;
mod event;
mod formula;
mod linear;
mod series;
mod solution;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_TERMS, DEFAULT_TOLERANCE};
pub use event::Event;
pub use solution::{Degenerate, Method, MethodKind, SeriesReport, Solution, Status};

use quadcat_core::{Equation, Observer};

use crate::{MethodChoice, classify};

/// Solves the equation with the method selected by [`classify`].
///
/// The observer receives an [`Event`] for each series term. See the
/// [module docs](self) for details.
///
/// Coefficients must be finite. Non-finite coefficients yield unspecified
/// roots.
pub fn solve<Obs>(equation: &Equation, config: &Config, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let normalized = equation.normalized();
    let choice = classify(&normalized);
    tracing::debug!(%equation, ?choice, "classified equation");

    let solution = match choice {
        MethodChoice::Linear => linear::solve(&normalized),
        MethodChoice::QuadraticFormula => formula::solve(&normalized),
        MethodChoice::CatalanSeries { parameter } => {
            series::solve(&normalized, parameter, config, &mut observer)
        }
    };

    if let Some(report) = solution.series_report()
        && report.status == Status::MaxTerms
    {
        tracing::warn!(
            %equation,
            terms_used = report.terms_used,
            error = report.error,
            tolerance = config.tolerance(),
            "catalan series did not converge"
        );
    }

    tracing::debug!(
        method = %solution.kind(),
        roots = ?solution.roots,
        "solved equation"
    );

    solution
}

/// Solves the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved(equation: &Equation, config: &Config) -> Solution {
    solve(equation, config, ())
}
