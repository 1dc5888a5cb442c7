/// Sign test emitted by the bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Number of expansions applied so far (0 for the initial guess).
    pub expansion: usize,
    /// Current lower endpoint.
    pub low: f64,
    /// Current upper endpoint.
    pub high: f64,
    /// Function value at `low`.
    pub f_low: f64,
    /// Function value at `high`.
    pub f_high: f64,
}
