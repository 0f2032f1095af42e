use std::fmt;

/// Indicates whether the series converged or hit the term cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Status {
    /// Successive partial sums differ by less than the tolerance.
    Converged,

    /// Reached the term cap without converging.
    MaxTerms,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Diagnostics attached to a Catalan-series solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesReport {
    /// Number of series terms summed.
    pub terms_used: usize,

    /// Final successive partial-sum delta.
    pub error: f64,

    /// How summation ended.
    pub status: Status,
}

/// Why a linear equation with `b == 0` has no unique root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Degenerate {
    /// `0 = 0`: every x is a solution.
    Identity,

    /// `0 = c` with `c != 0`: no x is a solution.
    Contradiction,
}

/// The method that produced a solution, with its method-specific payload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "method", rename_all = "kebab-case")
)]
pub enum Method {
    /// Linear equation `bx + c = 0`.
    ///
    /// `degenerate` is set when `b == 0` as well.
    Linear { degenerate: Option<Degenerate> },

    /// Closed-form quadratic formula.
    QuadraticFormula,

    /// Catalan-series summation.
    CatalanSeries(SeriesReport),
}

/// Identifies a solution method without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MethodKind {
    Linear,
    QuadraticFormula,
    CatalanSeries,
}

impl Method {
    /// Returns the method identifier.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Linear { .. } => MethodKind::Linear,
            Self::QuadraticFormula => MethodKind::QuadraticFormula,
            Self::CatalanSeries(_) => MethodKind::CatalanSeries,
        }
    }
}

impl MethodKind {
    /// Returns the stable identifier for this method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadraticFormula => "quadratic-formula",
            Self::CatalanSeries => "catalan-series",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of solving a quadratic equation.
///
/// # Root order
///
/// Quadratic roots are listed in ascending magnitude, and a repeated root is
/// listed once. For the Catalan series, `roots[0]` is the root the series
/// produces and `roots[1]`, when present, is derived from it by Vieta's
/// relation `x₁·x₂ = c/a`. Use [`native_root`](Self::native_root) and
/// [`derived_root`](Self::derived_root) to tell them apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Real roots found. Empty if there are none.
    pub roots: Vec<f64>,

    /// Method used, with its diagnostics.
    pub method: Method,
}

impl Solution {
    /// Returns the method identifier.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        self.method.kind()
    }

    /// Returns the series diagnostics, if the series method was used.
    #[must_use]
    pub fn series_report(&self) -> Option<&SeriesReport> {
        match &self.method {
            Method::CatalanSeries(report) => Some(report),
            _ => None,
        }
    }

    /// Returns the number of series terms used, if the series method was used.
    #[must_use]
    pub fn terms_used(&self) -> Option<usize> {
        self.series_report().map(|report| report.terms_used)
    }

    /// Returns the final series delta, if the series method was used.
    #[must_use]
    pub fn error(&self) -> Option<f64> {
        self.series_report().map(|report| report.error)
    }

    /// Returns the degeneracy marker for `a == b == 0` equations.
    #[must_use]
    pub fn degenerate(&self) -> Option<Degenerate> {
        match self.method {
            Method::Linear { degenerate } => degenerate,
            _ => None,
        }
    }

    /// Returns `false` only if the series stopped before meeting its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.series_report()
            .is_none_or(|report| report.status == Status::Converged)
    }

    /// Returns the root computed directly by the series.
    #[must_use]
    pub fn native_root(&self) -> Option<f64> {
        self.series_report().and(self.roots.first().copied())
    }

    /// Returns the series solution's second root, derived from the native one.
    #[must_use]
    pub fn derived_root(&self) -> Option<f64> {
        self.series_report().and(self.roots.get(1).copied())
    }
}
