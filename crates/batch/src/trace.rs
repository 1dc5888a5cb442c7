//! Solver observer that emits `tracing` events.
//!
//! The capability traits abstract over solver-specific event types, so one
//! observer works with every solver:
//!
//! - [`HasIterate`] — events that carry an iteration counter and an iterate
//! - [`HasResidual`] — events that carry a residual value

use blastoff_core::Observer;
use blastoff_solvers::{bisection, false_position, newton};
use tracing::trace;

use crate::Method;

/// An event that carries an iteration counter and the current iterate.
pub trait HasIterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the iterate evaluated this iteration.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// Emits one `TRACE` event per solver iteration and never intervenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracingObserver {
    method: Method,
    coefficient: f64,
}

impl TracingObserver {
    /// Creates an observer that tags events with a method and coefficient.
    #[must_use]
    pub fn new(method: Method, coefficient: f64) -> Self {
        Self {
            method,
            coefficient,
        }
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        trace!(
            method = %self.method,
            a = self.coefficient,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "solver iteration"
        );
        None
    }
}

// --- HasIterate and HasResidual for solver events ---

macro_rules! impl_event_traits {
    ($($event:ty),+) => {$(
        impl HasIterate for $event {
            fn iter(&self) -> usize {
                self.iter
            }

            fn x(&self) -> f64 {
                self.x
            }
        }

        impl HasResidual for $event {
            fn residual(&self) -> f64 {
                self.residual
            }
        }
    )+};
}

impl_event_traits!(bisection::Event, false_position::Event, newton::Event);
