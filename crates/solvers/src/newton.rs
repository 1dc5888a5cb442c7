//! Newton-Raphson iteration from an initial guess.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f(x)` and the slope `f'(x)` from a [`Derivative`]
//! provider, then steps to `x_next = x − f(x) / f'(x)`. The solve:
//!
//! - ends with [`Status::FlatDerivative`] when `|f'(x)| < FLAT_SLOPE`,
//! - ends with [`Status::NonFinite`] when the step is not finite,
//! - converges to `x_next` when both `|x_next − x|` and `|f(x)|` are below `eps`.
//!
//! Otherwise `x_next` becomes the next iterate, clamped to [`DOMAIN_FLOOR`]
//! when it is not positive. The clamp keeps iterates inside the domain of
//! `ln(d)` but can stall the solve or let it converge to a non-positive
//! `x_next`, since the convergence test runs before the clamp.
//!
//! The analytic and numeric variants share this loop and differ only in the
//! derivative provider. [`analytic`] and [`numeric`] wire them to [`Thrust`].
//!
//! [`Thrust`]: blastoff_core::Thrust


use blastoff_core::{Analytic, CentralDifference, Derivative, Function, Observer, Thrust};

use crate::{Action, Config, Solution, Status};

/// Slopes with a smaller magnitude are treated as flat.
pub const FLAT_SLOPE: f64 = 1e-14;

/// Replacement for a non-positive iterate.
pub const DOMAIN_FLOOR: f64 = 1e-3;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current iterate.
    pub x: f64,
    /// Residual at the current iterate.
    pub residual: f64,
    /// Slope at the current iterate.
    pub slope: f64,
}

/// Finds a root of `function` by Newton-Raphson, starting from `x0`.
/// Observers see each iteration's iterate, residual, and slope.
#[must_use]
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    a: f64,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    F: Function,
    D: Derivative,
    Obs: Observer<Event, Action>,
{
    let eps = config.eps();
    let mut x = x0;
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        residual = function.evaluate(x, a);
        let slope = derivative.slope(x, a);

        let event = Event {
            iter,
            x,
            residual,
            slope,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver, x, residual, iter);
        }

        if slope.abs() < FLAT_SLOPE {
            return finish(Status::FlatDerivative, x, residual, iter);
        }

        let next = x - residual / slope;
        if !next.is_finite() {
            return finish(Status::NonFinite, next, residual, iter);
        }

        if (next - x).abs() < eps && residual.abs() < eps {
            return finish(Status::Converged, next, residual, iter);
        }

        x = if next <= 0.0 { DOMAIN_FLOOR } else { next };
    }

    finish(Status::MaxIters, x, residual, config.max_iters())
}

/// Runs Newton-Raphson without observation.
#[must_use]
pub fn solve_unobserved<F: Function, D: Derivative>(
    function: &F,
    derivative: &D,
    a: f64,
    x0: f64,
    config: &Config,
) -> Solution {
    solve(function, derivative, a, x0, config, ())
}

/// Solves [`Thrust`] with its closed-form derivative.
#[must_use]
pub fn analytic(a: f64, x0: f64, config: &Config) -> Solution {
    solve_unobserved(&Thrust, &Analytic, a, x0, config)
}

/// Solves [`Thrust`] with a central-difference derivative.
#[must_use]
pub fn numeric(a: f64, x0: f64, config: &Config) -> Solution {
    solve_unobserved(&Thrust, &CentralDifference::default(), a, x0, config)
}

fn finish(status: Status, x: f64, residual: f64, iters: usize) -> Solution {
    Solution {
        status,
        x,
        residual,
        iters,
    }
}
