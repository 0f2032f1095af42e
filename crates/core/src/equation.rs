use std::fmt;

/// A quadratic equation `ax² + bx + c = 0`.
///
/// Construction places no constraints on the coefficients. Whether the
/// equation is degenerate (`a == 0`, `b == 0`, ...) is decided when it is
/// solved. Coefficients are expected to be finite; non-finite values yield
/// unspecified results.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Equation {
    /// Creates an equation from its coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the same equation divided through by its largest coefficient
    /// magnitude.
    ///
    /// The roots are unchanged, and `b²` and `4ac` stay representable for any
    /// finite coefficients. An all-zero or non-finite equation is returned as
    /// is.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let scale = self.a.abs().max(self.b.abs()).max(self.c.abs());
        if scale == 0.0 || !scale.is_finite() {
            return *self;
        }
        Self::new(self.a / scale, self.b / scale, self.c / scale)
    }

    /// Returns the discriminant `b² - 4ac`.
    ///
    /// Overflows for coefficients beyond about `1e154`; use
    /// [`normalized`](Self::normalized) first when that matters.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns the series parameter `A = ac/b²`, or `None` when `b == 0`.
    #[must_use]
    pub fn catalan_parameter(&self) -> Option<f64> {
        if self.b == 0.0 {
            None
        } else {
            Some((self.a / self.b) * (self.c / self.b))
        }
    }

    /// Evaluates `ax² + bx + c` at `x`.
    ///
    /// A root returns a value near zero, which makes this the natural check
    /// for reported solutions.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x² + {}x + {} = 0", self.a, self.b, self.c)
    }
}
