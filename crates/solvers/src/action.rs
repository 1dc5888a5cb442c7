/// Control actions an observer can request from a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver immediately.
    ///
    /// Root solvers report [`Status::StoppedByObserver`], which counts as
    /// non-convergence. The bracket search fails with
    /// [`bracket::Error::StoppedByObserver`].
    ///
    /// [`Status::StoppedByObserver`]: crate::Status::StoppedByObserver
    /// [`bracket::Error::StoppedByObserver`]: crate::bracket::Error::StoppedByObserver
    StopEarly,
}
