//! Catalan numbers.
//!
//! The n-th Catalan number `C(n) = binom(2n, n) / (n + 1)` gives the sequence
//! `1, 1, 2, 5, 14, 42, 132, 429, …`. The generating function
//! `Σ C(n)·Aⁿ = (1 - √(1 - 4A)) / (2A)` is the smaller root of
//! `1 - u + A·u² = 0`, which is what makes these numbers useful for solving
//! quadratics. The series converges for `|A| ≤ 1/4`.
//!
//! [`catalan_number`] computes exact values. [`Coefficients`] streams them as
//! `f64` for series summation, continuing past the exact range with the
//! floating-point recurrence.

/// Largest `n` for which [`catalan_number`] returns an exact value.
pub const MAX_EXACT_INDEX: u32 = 69;

/// Returns the exact n-th Catalan number, or `None` if it exceeds `u128::MAX`
/// (`n > MAX_EXACT_INDEX`).
///
/// Uses the recurrence `C(k) = C(k-1)·2(2k-1)/(k+1)`. The factor is reduced to
/// lowest terms first, and the reduced denominator always divides `C(k-1)`, so
/// no intermediate value is larger than `C(k)`.
#[must_use]
pub fn catalan_number(n: u32) -> Option<u128> {
    (1..=u128::from(n)).try_fold(1_u128, |value, k| next_exact(value, k))
}

/// Advances an exact Catalan value from index `k - 1` to `k`.
fn next_exact(value: u128, k: u128) -> Option<u128> {
    let numerator = 2 * (2 * k - 1);
    let denominator = k + 1;
    let common = gcd(numerator, denominator);
    (value / (denominator / common)).checked_mul(numerator / common)
}

fn gcd(a: u128, b: u128) -> u128 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// An infinite iterator over Catalan numbers as `f64` series coefficients.
///
/// Values are converted from the exact integers while those are available,
/// then continue with the same recurrence in floating point. Beyond the
/// exact range the coefficients are multiplied by vanishing powers `Aⁿ`, so
/// the rounding here never dominates a converging series.
#[derive(Debug, Clone)]
pub struct Coefficients {
    index: u32,
    exact: Option<u128>,
    value: f64,
}

impl Coefficients {
    /// Creates an iterator starting at `C(0) = 1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: 0,
            exact: Some(1),
            value: 1.0,
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Coefficients {
    type Item = f64;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f64> {
        let current = self.value;

        let k = self.index.saturating_add(1);
        self.exact = self
            .exact
            .and_then(|value| next_exact(value, u128::from(k)));
        self.value = match self.exact {
            Some(exact) => exact as f64,
            None => {
                let k = f64::from(k);
                self.value * 2.0 * (2.0 * k - 1.0) / (k + 1.0)
            }
        };
        self.index = k;

        Some(current)
    }
}
