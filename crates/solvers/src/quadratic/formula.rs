use quadcat_core::Equation;

use super::{Method, Solution};

/// Solves a quadratic with `a != 0` using the quadratic formula.
pub(super) fn solve(equation: &Equation) -> Solution {
    Solution {
        roots: roots(equation),
        method: Method::QuadraticFormula,
    }
}

/// Returns the real roots in ascending magnitude.
///
/// Avoids cancellation in `-b ± √D` by computing the larger-magnitude root
/// from the sign-matched branch, `q = -(b + sign(b)·√D)/2`, and recovering
/// the other as `c/q`.
pub(super) fn roots(equation: &Equation) -> Vec<f64> {
    let Equation { a, b, c } = *equation;
    let discriminant = equation.discriminant();

    if discriminant < 0.0 {
        return Vec::new();
    }

    if discriminant == 0.0 {
        return vec![-b / (2.0 * a)];
    }

    // |q| ≥ √D/2 > 0, so the division is safe.
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    vec![c / q, q / a]
}
