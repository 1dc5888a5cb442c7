//! Batch runs of every root solver over a sequence of coefficients.
//!
//! For each coefficient `a` the runner searches for a bracket of
//! [`Thrust`](blastoff_core::Thrust), then runs bisection and false position
//! on the bracket and both Newton-Raphson variants from its midpoint. Each
//! method's outcome is classified by whether its root exceeds
//! [`EXPLOSION_THRESHOLD`].
//!
//! # Modules
//!
//! - [`coefficients`] — generated or manual coefficient sequences
//! - [`report`] — delimited text report with explicit number formatting
//! - [`table`] — fixed-width console table
//! - [`trace`] — a solver observer that emits `tracing` events

mod classification;
mod method;
mod runner;

pub mod coefficients;
pub mod report;
pub mod table;
pub mod trace;

pub use classification::{Classification, EXPLOSION_THRESHOLD};
pub use coefficients::Coefficients;
pub use method::Method;
pub use runner::{CaseResult, Outcome, OutcomeStatus, run, run_case, run_parallel};
