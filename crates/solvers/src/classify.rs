use quadcat_core::Equation;

/// Radius of convergence of the Catalan series in `A = ac/b²`.
///
/// Equations with `|A| ≤ SERIES_RADIUS` are series-eligible.
pub const SERIES_RADIUS: f64 = 0.25;

/// The solution path selected for an equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MethodChoice {
    /// `a == 0`: linear, or degenerate if `b == 0` as well.
    Linear,

    /// Closed-form quadratic formula.
    ///
    /// Chosen when `b == 0` (no series parameter) or `|A| > 1/4`.
    QuadraticFormula,

    /// Catalan series in the given parameter `A = ac/b²`, with `|A| ≤ 1/4`.
    CatalanSeries { parameter: f64 },
}

/// Selects the solution path for an equation.
///
/// Rules are checked in order, and the first match wins:
///
/// 1. `a == 0` → [`MethodChoice::Linear`]
/// 2. `b == 0` → [`MethodChoice::QuadraticFormula`]
/// 3. `|ac/b²| ≤ 1/4` → [`MethodChoice::CatalanSeries`], otherwise
///    [`MethodChoice::QuadraticFormula`]
#[must_use]
pub fn classify(equation: &Equation) -> MethodChoice {
    if equation.a == 0.0 {
        return MethodChoice::Linear;
    }

    match equation.catalan_parameter() {
        Some(parameter) if parameter.abs() <= SERIES_RADIUS => {
            MethodChoice::CatalanSeries { parameter }
        }
        _ => MethodChoice::QuadraticFormula,
    }
}
