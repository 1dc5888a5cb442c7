//! Bracket search and scalar root solvers.
//!
//! Every solver drives `f(d, a)` toward zero for one coefficient `a`, using the
//! shared run [`Config`] (precision `eps` and iteration budget) and reporting a
//! [`Solution`]. A solution only exposes a root when it converged.
//!
//! # Solvers
//!
//! - [`bracket`] — geometric search for an interval with a sign change
//! - [`bisection`] — midpoint halving of a bracket
//! - [`false_position`] — secant-style updates that keep the bracket
//! - [`newton`] — Newton-Raphson, parameterized by a [`Derivative`] provider
//!
//! Each solver accepts an [`Observer`] that sees one event per iteration and
//! may return [`Action::StopEarly`].
//!
//! [`Derivative`]: blastoff_core::Derivative
//! [`Observer`]: blastoff_core::Observer

mod action;
mod config;
mod solution;

pub mod bisection;
pub mod bracket;
pub mod false_position;
pub mod newton;

pub use action::Action;
pub use bracket::Bracket;
pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};
