use thiserror::Error;

use crate::quadratic::ConfigError;

/// Errors returned by the coefficient-level [`solve`](crate::solve) entry point.
///
/// Degenerate equations and series non-convergence are not errors. They are
/// reported on the [`Solution`](crate::Solution).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
