//! False position (regula falsi) on a validated bracket.
//!
//! Each iteration draws the secant through the bracket endpoints and takes
//! its zero, `x = (low·f(high) − high·f(low)) / (f(high) − f(low))`, as the
//! new estimate. The endpoint whose function value shares the estimate's sign
//! is replaced, so the bracket always keeps its sign change.
//!
//! The solve converges when the residual at the estimate drops below `eps`,
//! or when the bracket collapses below `eps`. Endpoints with equal function
//! values make the secant undefined and end the solve with
//! [`Status::DegenerateSecant`]. The endpoints of a [`Bracket`] always differ
//! in sign, so that status only shows up if the function itself is
//! inconsistent between calls.

use blastoff_core::{Function, Observer};

use crate::{Action, Bracket, Config, Solution, Status};

/// Iteration event emitted by the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket the secant was drawn across.
    pub bracket: [f64; 2],
    /// The secant estimate evaluated this iteration.
    pub x: f64,
    /// Residual at the estimate.
    pub residual: f64,
}

/// Finds a root of `function` inside `bracket` by false position.
/// Observers see each iteration's estimate and bracket state.
#[must_use]
pub fn solve<F, Obs>(
    function: &F,
    a: f64,
    bracket: &Bracket,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let eps = config.eps();
    let [mut low, mut high] = bracket.as_array();
    let mut f_low = function.evaluate(low, a);
    let mut f_high = function.evaluate(high, a);

    let mut x = low;
    let mut residual = f_low;

    for iter in 1..=config.max_iters() {
        let Some(estimate) = secant_zero([low, high], [f_low, f_high]) else {
            return finish(Status::DegenerateSecant, x, residual, iter);
        };
        x = estimate;
        if !x.is_finite() {
            return finish(Status::NonFinite, x, residual, iter);
        }
        residual = function.evaluate(x, a);

        let event = Event {
            iter,
            bracket: [low, high],
            x,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver, x, residual, iter);
        }

        if residual.abs() < eps {
            return finish(Status::Converged, x, residual, iter);
        }

        if f_low * residual < 0.0 {
            high = x;
            f_high = residual;
        } else {
            low = x;
            f_low = residual;
        }

        if (high - low).abs() < eps {
            return finish(Status::Converged, x, residual, iter);
        }
    }

    finish(Status::MaxIters, x, residual, config.max_iters())
}

/// Runs false position without observation.
#[must_use]
pub fn solve_unobserved<F: Function>(
    function: &F,
    a: f64,
    bracket: &Bracket,
    config: &Config,
) -> Solution {
    solve(function, a, bracket, config, ())
}

/// Returns the zero of the secant through `(x[0], f[0])` and `(x[1], f[1])`,
/// or `None` when the endpoint values are equal.
fn secant_zero(x: [f64; 2], f: [f64; 2]) -> Option<f64> {
    #[allow(clippy::float_cmp)]
    if f[0] == f[1] {
        return None;
    }
    Some((x[0] * f[1] - x[1] * f[0]) / (f[1] - f[0]))
}

fn finish(status: Status, x: f64, residual: f64, iters: usize) -> Solution {
    Solution {
        status,
        x,
        residual,
        iters,
    }
}
