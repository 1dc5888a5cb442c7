//! Geometric search for a bracket around a root.
//!
//! # Algorithm
//!
//! Starting from a guess interval `[low, high]` (default `[1, 2]`), the search
//! clamps a non-positive `low` to the configured floor and tests whether the
//! function changes sign across the interval. If not, it expands the interval
//! one side at a time: when `|low| < |high|` it doubles `high`, otherwise it
//! halves `low` (re-clamping to the floor). The interval is re-tested after
//! every expansion.
//!
//! The search fails with [`Error::NotFound`] once the expansion budget is
//! spent. This means no root was found in a reachable range, not that the
//! function misbehaved.
//!
//! # Observer Events
//!
//! The finder emits one [`Event`] per sign test, starting with the unexpanded
//! guess at `expansion == 0`. Observers can return [`Action::StopEarly`] to
//! abandon the search.

mod config;
mod error;
mod event;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use blastoff_core::{Function, Observer};

use crate::Action;

/// Interval the search starts from unless a caller supplies another.
pub const DEFAULT_GUESS: [f64; 2] = [1.0, 2.0];

/// An ordered interval whose endpoints have function values of opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    low: f64,
    high: f64,
}

impl Bracket {
    /// Creates a bracket after checking the endpoints against `function`.
    ///
    /// The endpoints may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] if an endpoint is not finite, or
    /// [`Error::NoSignChange`] if `f(low, a) · f(high, a)` is not negative.
    pub fn new<F: Function>(function: &F, a: f64, bounds: [f64; 2]) -> Result<Self, Error> {
        let [x0, x1] = bounds;
        if !x0.is_finite() || !x1.is_finite() {
            return Err(Error::NonFinite { low: x0, high: x1 });
        }

        let (low, high) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let f_low = function.evaluate(low, a);
        let f_high = function.evaluate(high, a);
        if !changes_sign(f_low, f_high) {
            return Err(Error::NoSignChange {
                low,
                high,
                f_low,
                f_high,
            });
        }

        Ok(Self { low, high })
    }

    /// Builds an ordered bracket from endpoints already known to change sign.
    fn from_checked(x0: f64, x1: f64) -> Self {
        if x0 <= x1 {
            Self { low: x0, high: x1 }
        } else {
            Self { low: x1, high: x0 }
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Searches for a bracket of `function` around a root, starting from `guess`.
///
/// The observer receives an [`Event`] for each sign test.
/// See the [module docs](self) for the expansion policy.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no sign change is found within the
/// expansion budget, or [`Error::StoppedByObserver`] if the observer stops
/// the search.
pub fn find<F, Obs>(
    function: &F,
    a: f64,
    guess: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Bracket, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [mut low, mut high] = guess;
    let floor = config.floor();

    if low <= 0.0 {
        low = floor;
    }

    for expansion in 0..=config.max_expansions() {
        if expansion > 0 {
            if low.abs() < high.abs() {
                high *= 2.0;
            } else {
                low /= 2.0;
                if low <= 0.0 {
                    low = floor;
                }
            }
        }

        let f_low = function.evaluate(low, a);
        let f_high = function.evaluate(high, a);

        let event = Event {
            expansion,
            low,
            high,
            f_low,
            f_high,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Err(Error::StoppedByObserver {
                low,
                high,
                expansions: expansion,
            });
        }

        if changes_sign(f_low, f_high) {
            return Ok(Bracket::from_checked(low, high));
        }
    }

    Err(Error::NotFound {
        low,
        high,
        expansions: config.max_expansions(),
    })
}

/// Searches for a bracket without observation.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no sign change is found within the
/// expansion budget.
pub fn find_unobserved<F: Function>(
    function: &F,
    a: f64,
    guess: [f64; 2],
    config: &Config,
) -> Result<Bracket, Error> {
    find(function, a, guess, config, ())
}

fn changes_sign(f_low: f64, f_high: f64) -> bool {
    f_low * f_high < 0.0
}
