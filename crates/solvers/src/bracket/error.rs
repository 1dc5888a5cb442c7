use thiserror::Error;

/// Errors that can occur when building or searching for a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket contains non-finite value: [{low}, {high}]")]
    NonFinite { low: f64, high: f64 },

    #[error("no sign change on [{low}, {high}]: f(low)={f_low}, f(high)={f_high}")]
    NoSignChange {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    #[error("no bracket found after {expansions} expansions, last tried [{low}, {high}]")]
    NotFound {
        low: f64,
        high: f64,
        expansions: usize,
    },

    #[error("bracket search stopped by observer after {expansions} expansions")]
    StoppedByObserver {
        low: f64,
        high: f64,
        expansions: usize,
    },
}
