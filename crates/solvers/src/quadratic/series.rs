use std::f64::consts::SQRT_2;

use quadcat_core::{Equation, Observer, catalan::Coefficients};

use super::{Action, Config, Event, Method, SeriesReport, Solution, Status};

/// Solves a series-eligible quadratic (`a != 0`, `b != 0`, `|A| ≤ 1/4`).
///
/// The substitution `x = -(c/b)·u` maps the equation onto
/// `1 - u + A·u² = 0`, whose smaller root is `u = Σ C(n)·Aⁿ`. The series gives
/// the smaller-magnitude root directly and Vieta's relation gives the other.
pub(super) fn solve<Obs>(
    equation: &Equation,
    parameter: f64,
    config: &Config,
    observer: &mut Obs,
) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let Equation { a, b, c } = *equation;

    // With c = 0 the parameter is zero, the series is exactly C(0) = 1, and
    // Vieta's relation degenerates to 0/0. Factor instead: x·(ax + b) = 0.
    if c == 0.0 {
        return Solution {
            roots: vec![0.0, -b / a],
            method: Method::CatalanSeries(SeriesReport {
                terms_used: 1,
                error: 0.0,
                status: Status::Converged,
            }),
        };
    }

    let (sum, report) = sum(parameter, root_scale(equation, parameter), config, observer);

    let native = -(c / b) * sum;
    let mut roots = vec![native];
    if equation.discriminant() != 0.0 {
        roots.push(c / (a * native));
    }

    Solution {
        roots,
        method: Method::CatalanSeries(report),
    }
}

/// Bounds how far either root moves per unit of error in `u`.
///
/// The native root is `-(c/b)·u` and the derived root is `-(b/a)/u`, so an
/// error `δ` in `u` moves them by `|c/b|·δ` and about `|b/a|·δ/u²`. For
/// `A ≥ 0` every partial sum is at least 1. For `-1/4 ≤ A < 0` the sum stays
/// above `2/(1 + √2)`.
fn root_scale(equation: &Equation, parameter: f64) -> f64 {
    let Equation { a, b, c } = *equation;
    let floor = if parameter >= 0.0 { 1.0 } else { 2.0 / (1.0 + SQRT_2) };
    (c / b).abs().max((b / a).abs() / (floor * floor))
}

/// Upper bound on `|Σ_{k>n} C(k)·Aᵏ|` given the `n`-th term.
///
/// Successive terms have ratio `|A|·2(2k+1)/(k+2)`, which rises toward
/// `4|A|` and never reaches it. A positive series is bounded by the geometric
/// tail with ratio `4|A|`. An alternating one is bounded by its next term.
#[allow(clippy::cast_precision_loss)]
fn tail_bound(n: usize, term: f64, parameter: f64) -> f64 {
    let ratio = 4.0 * parameter.abs();
    if parameter < 0.0 {
        let k = n as f64;
        term.abs() * parameter.abs() * 2.0 * (2.0 * k + 1.0) / (k + 2.0)
    } else if ratio < 1.0 {
        term.abs() * ratio / (1.0 - ratio)
    } else {
        f64::INFINITY
    }
}

/// Sums `Σ C(n)·Aⁿ` until the remaining tail, scaled into root units, falls
/// below the tolerance, the term cap is reached, or the observer stops it.
///
/// The convergence check starts at the second term. The reported error is the
/// last successive difference `|S_n − S_{n−1}|`; for a single term that is its
/// distance from the empty sum.
fn sum<Obs>(
    parameter: f64,
    scale: f64,
    config: &Config,
    observer: &mut Obs,
) -> (f64, SeriesReport)
where
    Obs: Observer<Event, Action>,
{
    let mut sum = 0.0;
    let mut power = 1.0;
    let mut error = f64::INFINITY;

    for (n, coefficient) in (0..config.max_terms()).zip(Coefficients::new()) {
        let term = coefficient * power;
        let previous = sum;
        sum += term;
        error = (sum - previous).abs();

        tracing::trace!(n, term, partial_sum = sum, "catalan series term");

        let event = Event {
            n,
            coefficient,
            term,
            partial_sum: sum,
            delta: (n > 0).then_some(error),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return (sum, report(n + 1, error, Status::StoppedByObserver));
        }

        if n > 0 && scale * tail_bound(n, term, parameter) < config.tolerance() {
            return (sum, report(n + 1, error, Status::Converged));
        }

        power *= parameter;
    }

    (sum, report(config.max_terms(), error, Status::MaxTerms))
}

fn report(terms_used: usize, error: f64, status: Status) -> SeriesReport {
    SeriesReport {
        terms_used,
        error,
        status,
    }
}
