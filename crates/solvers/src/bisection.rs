//! Bisection on a validated bracket.
//!
//! Each iteration evaluates the midpoint. The solve converges when the
//! midpoint residual drops below `eps`, or when the bracket, after being
//! narrowed onto the half that keeps the sign change, is narrower than `eps`.
//! The reported root is the last midpoint.

use blastoff_core::{Function, Observer};

use crate::{Action, Bracket, Config, Solution, Status};

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket before this iteration narrows it.
    pub bracket: [f64; 2],
    /// The midpoint evaluated this iteration.
    pub x: f64,
    /// Residual at the midpoint.
    pub residual: f64,
}

/// Finds a root of `function` inside `bracket` by bisection.
/// Observers see each iteration's midpoint and bracket state.
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

    let mut x = low;
    let mut residual = f_low;

    for iter in 1..=config.max_iters() {
        x = 0.5 * (low + high);
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

        if f_low * residual > 0.0 {
            low = x;
            f_low = residual;
        } else {
            high = x;
        }

        if (high - low).abs() < eps {
            return finish(Status::Converged, x, residual, iter);
        }
    }

    finish(Status::MaxIters, x, residual, config.max_iters())
}

/// Runs bisection without observation.
#[must_use]
pub fn solve_unobserved<F: Function>(
    function: &F,
    a: f64,
    bracket: &Bracket,
    config: &Config,
) -> Solution {
    solve(function, a, bracket, config, ())
}

fn finish(status: Status, x: f64, residual: f64, iters: usize) -> Solution {
    Solution {
        status,
        x,
        residual,
        iters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use blastoff_core::Thrust;

    use crate::bracket;

    fn thrust_bracket(a: f64) -> Bracket {
        bracket::find_unobserved(&Thrust, a, bracket::DEFAULT_GUESS, &bracket::Config::default())
            .expect("bracket exists")
    }

    #[test]
    fn finds_square_root() {
        let square = |d: f64, a: f64| d * d - a;
        let bracket = Bracket::new(&square, 2.0, [0.0, 2.0]).expect("sign change");
        let config = Config::new(1e-10, 100).expect("valid config");

        let solution = solve_unobserved(&square, 2.0, &bracket, &config);

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn converges_on_thrust_within_budget() {
        let a = 0.5;
        let config = Config::default();
        let solution = solve_unobserved(&Thrust, a, &thrust_bracket(a), &config);

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters >= 1 && solution.iters <= config.max_iters());
        let root = solution.root().expect("converged");
        assert_relative_eq!(root, f64::exp(a), epsilon = 1e-5);
    }

    #[test]
    fn exhausts_budget_on_wide_bracket() {
        // [1, 32] needs 23 halvings to get below 1e-6.
        let a = 3.0;
        let config = Config::default();
        let solution = solve_unobserved(&Thrust, a, &thrust_bracket(a), &config);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, config.max_iters());
        assert_eq!(solution.root(), None);

        let config = Config::new(1e-6, 100).expect("valid config");
        let solution = solve_unobserved(&Thrust, a, &thrust_bracket(a), &config);
        assert_eq!(solution.status, Status::Converged);
        assert!(solution.iters > 20);
    }

    #[test]
    fn stops_on_small_residual_first() {
        // The first midpoint of [0, 4] is the exact root of d - 2.
        let line = |d: f64, _a: f64| d - 2.0;
        let bracket = Bracket::new(&line, 0.0, [0.0, 4.0]).expect("sign change");

        let solution = solve_unobserved(&line, 0.0, &bracket, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn observer_sees_shrinking_bracket() {
        let mut widths = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            widths.push(event.bracket[1] - event.bracket[0]);
            None
        };
        let bracket = thrust_bracket(0.5);
        let _ = solve(&Thrust, 0.5, &bracket, &Config::default(), observer);

        assert_relative_eq!(widths[0], 1.0);
        assert_relative_eq!(widths[1], 0.5);
        assert_relative_eq!(widths[2], 0.25);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter >= 3).then_some(Action::StopEarly);
        let bracket = thrust_bracket(0.5);
        let solution = solve(&Thrust, 0.5, &bracket, &Config::default(), observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.root(), None);
    }
}
