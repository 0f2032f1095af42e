//! Core types for solving quadratic equations.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Equation`] — the coefficient triple of `ax² + bx + c = 0`
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`catalan`] — exact Catalan numbers and the series coefficients derived
//!   from them

pub mod catalan;

mod equation;
mod observer;

pub use equation::Equation;
pub use observer::Observer;
