use blastoff_core::{Analytic, CentralDifference, Thrust};
use blastoff_solvers::{
    Bracket, Config, Solution, Status, bisection, bracket, false_position, newton,
};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{Classification, Method, trace::TracingObserver};

/// How a method finished for one coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The bracket search failed, so the method never ran.
    NoBracket,
    /// The method ran and finished with this status.
    Finished(Status),
}

/// One method's result for one coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// The root, if the method converged.
    pub root: Option<f64>,
    /// Iterations executed (0 when the method never ran).
    pub iters: usize,
    /// How the method finished.
    pub status: OutcomeStatus,
}

impl Outcome {
    /// Outcome recorded for every method when no bracket exists.
    #[must_use]
    pub fn no_bracket() -> Self {
        Self {
            root: None,
            iters: 0,
            status: OutcomeStatus::NoBracket,
        }
    }

    /// Returns whether the root makes the rocket explode.
    #[must_use]
    pub fn classification(&self) -> Classification {
        Classification::of(self.root)
    }
}

impl From<Solution> for Outcome {
    fn from(solution: Solution) -> Self {
        Self {
            root: solution.root(),
            iters: solution.iters,
            status: OutcomeStatus::Finished(solution.status),
        }
    }
}

/// Every method's result for one coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseResult {
    /// The coefficient `a`.
    pub coefficient: f64,
    /// The bracket all methods started from, if one was found.
    pub bracket: Option<Bracket>,
    /// Outcomes indexed by [`Method::index`].
    pub outcomes: [Outcome; 4],
}

impl CaseResult {
    /// Returns the outcome of `method`.
    #[must_use]
    pub fn outcome(&self, method: Method) -> &Outcome {
        &self.outcomes[method.index()]
    }
}

/// Runs every method for one coefficient.
///
/// A failed bracket search is not an error: every method is recorded as
/// [`OutcomeStatus::NoBracket`] with an undefined root.
#[must_use]
pub fn run_case(a: f64, config: &Config) -> CaseResult {
    let bracket = match bracket::find_unobserved(
        &Thrust,
        a,
        bracket::DEFAULT_GUESS,
        &bracket::Config::default(),
    ) {
        Ok(bracket) => bracket,
        Err(error) => {
            warn!(a, %error, "no bracket, every method is undefined");
            return CaseResult {
                coefficient: a,
                bracket: None,
                outcomes: [Outcome::no_bracket(); 4],
            };
        }
    };
    debug!(a, low = bracket.low(), high = bracket.high(), "bracket found");

    let x0 = bracket.midpoint();
    let observe = |method| TracingObserver::new(method, a);

    let outcomes = Method::ALL.map(|method| {
        let solution = match method {
            Method::Bisection => {
                bisection::solve(&Thrust, a, &bracket, config, observe(method))
            }
            Method::FalsePosition => {
                false_position::solve(&Thrust, a, &bracket, config, observe(method))
            }
            Method::NewtonAnalytic => {
                newton::solve(&Thrust, &Analytic, a, x0, config, observe(method))
            }
            Method::NewtonNumeric => newton::solve(
                &Thrust,
                &CentralDifference::default(),
                a,
                x0,
                config,
                observe(method),
            ),
        };
        debug!(
            a,
            %method,
            status = ?solution.status,
            iters = solution.iters,
            "method finished"
        );
        Outcome::from(solution)
    });

    CaseResult {
        coefficient: a,
        bracket: Some(bracket),
        outcomes,
    }
}

/// Runs every method for each coefficient, in order.
#[must_use]
pub fn run(coefficients: &[f64], config: &Config) -> Vec<CaseResult> {
    coefficients.iter().map(|&a| run_case(a, config)).collect()
}

/// Runs every method for each coefficient on the rayon thread pool.
///
/// Results are in input order and identical to [`run`].
#[must_use]
pub fn run_parallel(coefficients: &[f64], config: &Config) -> Vec<CaseResult> {
    coefficients
        .par_iter()
        .map(|&a| run_case(a, config))
        .collect()
}
