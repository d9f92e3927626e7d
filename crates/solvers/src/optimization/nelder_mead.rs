//! Nelder–Mead simplex search for multi-variable minimization.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `N + 1` vertices in `N`-dimensional space,
//! ordered by objective. Each iteration replaces the worst vertex by
//! reflecting it through the centroid of the others, expanding past the
//! reflection when it improves on the best vertex, or contracting toward the
//! centroid when it does not. If no contraction helps, every vertex shrinks
//! halfway toward the best one.
//!
//! The initial simplex is built from the starting guess `x0`: one vertex per
//! coordinate, with that coordinate scaled by 5% (or set to `0.00025` when it
//! is zero).
//!
//! # When to Use
//!
//! Nelder–Mead is appropriate when:
//! - The objective is continuous but derivatives are unavailable or unwanted
//! - The problem has few variables (the method degrades as `N` grows)
//! - Infeasible regions can be expressed as an infinite objective
//!
//! # Infeasible Points
//!
//! Problems may return `f64::INFINITY` as an objective (a NaN objective is
//! treated the same way). Such points rank as the worst possible and are
//! naturally moved away from; they are never errors.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, tagged with the simplex
//! [`Step`] that produced it:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the point as infeasible (useful for error
//! recovery or steering the search away from a region).

mod action;
mod config;
mod error;
mod event;
mod point;
mod search;
mod simplex;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Step};
pub use point::Point;
pub use solution::{Solution, Status};

use tincan_core::{Model, Observer, OptimizationProblem};

use search::search;

/// Finds the minimum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for every evaluation, including the
/// `N + 1` evaluations that build the initial simplex.
/// See the [module docs](self) for details on observer actions.
///
/// Reaching the iteration or evaluation limit is not an error: the returned
/// [`Solution`] carries a [`Status`] that callers must inspect.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation
/// and the observer does not return [`Action::AssumeWorse`] to recover,
/// or if the search ends without any successful evaluation.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    search(model, problem, x0, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}
