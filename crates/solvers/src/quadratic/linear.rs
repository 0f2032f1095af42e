use quadcat_core::Equation;

use super::{Degenerate, Method, Solution};

/// Solves `bx + c = 0`, ignoring `a`.
pub(super) fn solve(equation: &Equation) -> Solution {
    let Equation { b, c, .. } = *equation;

    if b != 0.0 {
        return Solution {
            roots: vec![-c / b],
            method: Method::Linear { degenerate: None },
        };
    }

    let degenerate = if c == 0.0 {
        Degenerate::Identity
    } else {
        Degenerate::Contradiction
    };

    Solution {
        roots: Vec::new(),
        method: Method::Linear {
            degenerate: Some(degenerate),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn single_root() {
        let solution = solve(&Equation::new(0.0, 3.0, 6.0));
        assert_eq!(solution.roots.len(), 1);
        assert_relative_eq!(solution.roots[0], -2.0);
        assert_eq!(solution.degenerate(), None);
    }

    #[test]
    fn identity() {
        let solution = solve(&Equation::new(0.0, 0.0, 0.0));
        assert!(solution.roots.is_empty());
        assert_eq!(solution.degenerate(), Some(Degenerate::Identity));
    }

    #[test]
    fn contradiction() {
        let solution = solve(&Equation::new(0.0, 0.0, 5.0));
        assert!(solution.roots.is_empty());
        assert_eq!(solution.degenerate(), Some(Degenerate::Contradiction));
    }
}
