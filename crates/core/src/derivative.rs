use crate::function::{DOMAIN_SENTINEL, Function, Thrust};

/// Default step `h` for [`CentralDifference`].
pub const DEFAULT_STEP: f64 = 1e-7;

/// Provides the slope `∂f/∂d` of a function at `d` for coefficient `a`.
pub trait Derivative {
    /// Returns the slope at `d` for coefficient `a`.
    fn slope(&self, d: f64, a: f64) -> f64;
}

/// Closed-form derivative of [`Thrust`]: `f'(d, a) = a − ln(d) − 1`.
///
/// Probes at `d <= 0` return [`DOMAIN_SENTINEL`], matching [`Thrust`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analytic;

impl Derivative for Analytic {
    fn slope(&self, d: f64, a: f64) -> f64 {
        if d <= 0.0 {
            return DOMAIN_SENTINEL;
        }
        a - d.ln() - 1.0
    }
}

/// Central-difference approximation of a function's derivative.
///
/// Computes `(f(d + h) − f(d_lo)) / 2h` where `d_lo = d − h` when that stays
/// positive. Otherwise `d_lo = d + h`, so both samples land on the same side
/// of `d` and the estimate degenerates to zero. Callers treat a zero slope as
/// a flat derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference<F> {
    function: F,
    step: f64,
}

impl<F: Function> CentralDifference<F> {
    /// Creates a central difference over `function` with [`DEFAULT_STEP`].
    pub fn new(function: F) -> Self {
        Self {
            function,
            step: DEFAULT_STEP,
        }
    }

    /// Returns a copy that uses step `h`.
    #[must_use]
    pub fn with_step(self, step: f64) -> Self {
        Self { step, ..self }
    }

    /// Returns the difference step `h`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for CentralDifference<Thrust> {
    fn default() -> Self {
        Self::new(Thrust)
    }
}

impl<F: Function> Derivative for CentralDifference<F> {
    fn slope(&self, d: f64, a: f64) -> f64 {
        let h = self.step;
        let d_lo = if d - h > 0.0 { d - h } else { d + h };
        let f_hi = self.function.evaluate(d + h, a);
        let f_lo = self.function.evaluate(d_lo, a);
        (f_hi - f_lo) / (2.0 * h)
    }
}
