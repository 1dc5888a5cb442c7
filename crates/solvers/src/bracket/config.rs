use thiserror::Error;

/// Configuration for the bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    floor: f64,
    max_expansions: usize,
}

/// Errors that can occur when validating a bracket search config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("floor must be finite and greater than zero, got {0}")]
    Floor(f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            floor: 1e-3,
            max_expansions: 50,
        }
    }
}

impl Config {
    /// Creates a new config with a validated floor.
    ///
    /// # Errors
    ///
    /// Returns an error if `floor` is not finite and positive.
    pub fn new(floor: f64, max_expansions: usize) -> Result<Self, ConfigError> {
        if !floor.is_finite() || floor <= 0.0 {
            return Err(ConfigError::Floor(floor));
        }

        Ok(Self {
            floor,
            max_expansions,
        })
    }

    /// Returns the smallest lower endpoint the search will probe.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Returns the maximum number of expansion steps.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }
}
