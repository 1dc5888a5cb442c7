/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Met the stopping test within the iteration budget.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Newton's derivative was too flat to take a step.
    FlatDerivative,

    /// False position endpoints had equal function values.
    DegenerateSecant,

    /// An update produced a NaN or infinite iterate.
    NonFinite,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate computed by the solver.
    ///
    /// Only meaningful when the solver converged; prefer [`Solution::root`].
    pub x: f64,

    /// Residual from the last stopping test.
    pub residual: f64,

    /// Iterations executed, at most the configured budget.
    pub iters: usize,
}

impl Solution {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the root, or `None` if the solver did not converge.
    ///
    /// Newton-Raphson runs its convergence test before clamping the next
    /// iterate, so under a loose `eps` a converged root can be non-positive,
    /// outside the domain of the function.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.is_converged().then_some(self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_hidden_unless_converged() {
        let mut solution = Solution {
            status: Status::Converged,
            x: 1.5,
            residual: 0.0,
            iters: 3,
        };
        assert_eq!(solution.root(), Some(1.5));

        for status in [
            Status::MaxIters,
            Status::FlatDerivative,
            Status::DegenerateSecant,
            Status::NonFinite,
            Status::StoppedByObserver,
        ] {
            solution.status = status;
            assert!(!solution.is_converged());
            assert_eq!(solution.root(), None);
        }
    }
}
