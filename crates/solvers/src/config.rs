use thiserror::Error;

/// Run parameters shared by every solver and every coefficient in a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    eps: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a run config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("eps must be finite and greater than zero, got {0}")]
    Eps(f64),

    #[error("max_iters must be greater than zero")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a new config with a validated precision and budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(eps: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::Eps(eps));
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self { eps, max_iters })
    }

    /// Returns the precision used by every stopping test.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the maximum number of iterations per solve.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
