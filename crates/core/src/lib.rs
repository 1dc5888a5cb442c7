//! Core traits and types for blastoff.
//!
//! This crate defines the shared abstractions that solvers and batch runs
//! build on:
//!
//! - [`Function`] — a scalar function `f(d, a)` of a variable and a coefficient
//! - [`Thrust`] — the fixed target `f(d, a) = a·d − d·ln(d)`
//! - [`Derivative`] — a slope provider, either [`Analytic`] or [`CentralDifference`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod derivative;
mod function;
mod observer;

pub use derivative::{Analytic, CentralDifference, DEFAULT_STEP, Derivative};
pub use function::{DOMAIN_SENTINEL, Function, Thrust};
pub use observer::Observer;
