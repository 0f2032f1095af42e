//! Property-based tests for method consistency.

use proptest::prelude::*;

use quadcat_core::Equation;

use super::{Config, MethodKind, formula, solve_unobserved};

// Coefficient magnitudes kept away from zero and overflow.
fn coefficient() -> impl Strategy<Value = f64> {
    prop_oneof![-10.0..-0.1, 0.1..10.0]
}

// Series parameter anywhere within the radius.
fn parameter() -> impl Strategy<Value = f64> {
    prop_oneof![-0.25..-1e-6, 1e-6..=0.25]
}

// Series parameter that converges well inside the default term cap.
fn moderate_parameter() -> impl Strategy<Value = f64> {
    prop_oneof![-0.1..-1e-6, 1e-6..0.1]
}

/// Builds an equation with the given leading, linear and series parameter.
fn series_equation(a: f64, b: f64, parameter: f64) -> Equation {
    Equation::new(a, b, parameter * b * b / a)
}

proptest! {
    #[test]
    fn converged_series_agrees_with_formula(
        a in coefficient(),
        b in coefficient(),
        p in parameter(),
        exponent in 4..=10_i32,
    ) {
        let equation = series_equation(a, b, p);
        let tolerance = 10.0_f64.powi(-exponent);
        let solution = solve_unobserved(&equation, &Config::with_tolerance(tolerance).unwrap());

        if solution.kind() == MethodKind::CatalanSeries && solution.is_converged() {
            let expected = formula::roots(&equation);
            prop_assert_eq!(solution.roots.len(), expected.len());
            for (series, formula) in solution.roots.iter().zip(&expected) {
                prop_assert!(
                    (series - formula).abs() < tolerance,
                    "series {} vs formula {} for {} at {}", series, formula, equation, tolerance
                );
            }
        }
    }

    #[test]
    fn moderate_parameter_converges(a in coefficient(), b in coefficient(), p in moderate_parameter()) {
        let equation = series_equation(a, b, p);
        let solution = solve_unobserved(&equation, &Config::default());

        prop_assert_eq!(solution.kind(), MethodKind::CatalanSeries);
        prop_assert!(solution.is_converged(), "{:?} for {}", solution, equation);
    }

    #[test]
    fn terms_used_is_monotone_in_tolerance(
        a in coefficient(),
        b in coefficient(),
        p in parameter(),
        exponent in 3..12_i32,
    ) {
        let equation = series_equation(a, b, p);
        let loose = Config::with_tolerance(10.0_f64.powi(-exponent)).unwrap();
        let tight = Config::with_tolerance(10.0_f64.powi(-exponent - 2)).unwrap();

        let loose_terms = solve_unobserved(&equation, &loose).terms_used().unwrap();
        let tight_terms = solve_unobserved(&equation, &tight).terms_used().unwrap();

        prop_assert!(loose_terms <= tight_terms);
    }

    #[test]
    fn roots_are_real_solutions(a in coefficient(), b in coefficient(), c in coefficient()) {
        let equation = Equation::new(a, b, c);
        let solution = solve_unobserved(&equation, &Config::default());

        if solution.is_converged() {
            let scale = a.abs().max(b.abs()).max(c.abs());
            for &root in &solution.roots {
                let residual = equation.evaluate(root) / (scale * root.abs().max(1.0).powi(2));
                prop_assert!(residual.abs() < 1e-8, "root {} of {}", root, equation);
            }
        }
    }

    #[test]
    fn solving_twice_is_identical(a in coefficient(), b in coefficient(), c in coefficient()) {
        let equation = Equation::new(a, b, c);
        let first = solve_unobserved(&equation, &Config::default());
        let second = solve_unobserved(&equation, &Config::default());
        prop_assert_eq!(first, second);
    }
}
