/// Actions an observer can take during Nelder–Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best solution found so far.
    StopEarly,

    /// Treat this point as infeasible, with an objective of `f64::INFINITY`.
    ///
    /// The point still occupies its place in the simplex, so the search moves
    /// away from it, but it is never reported as the solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when domain knowledge suggests
    ///   the failed region is suboptimal but the search should continue.
    /// - Steering the search away from a region even when evaluation succeeded.
    AssumeWorse,
}
