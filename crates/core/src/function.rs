/// Value returned when a function is probed outside its domain.
///
/// This is a fence, not a function value. Sign comparisons stay well defined
/// on invalid probes, but convergence tests must never treat it as a residual.
pub const DOMAIN_SENTINEL: f64 = 1.0e10;

/// A scalar function of a variable `d` and a coefficient `a`.
///
/// Closures of the form `Fn(f64, f64) -> f64` implement this trait, so
/// solvers accept either a named function type or an ad hoc closure.
pub trait Function {
    /// Evaluates the function at `d` for coefficient `a`.
    fn evaluate(&self, d: f64, a: f64) -> f64;
}

/// Blanket implementation for function closures.
impl<F> Function for F
where
    F: Fn(f64, f64) -> f64,
{
    fn evaluate(&self, d: f64, a: f64) -> f64 {
        self(d, a)
    }
}

/// The target function `f(d, a) = a·d − d·ln(d)`.
///
/// Defined for `d > 0`. Its only positive root is `d = eᵃ`.
/// Probes at `d <= 0` return [`DOMAIN_SENTINEL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thrust;

impl Function for Thrust {
    fn evaluate(&self, d: f64, a: f64) -> f64 {
        if d <= 0.0 {
            return DOMAIN_SENTINEL;
        }
        a * d - d * d.ln()
    }
}
