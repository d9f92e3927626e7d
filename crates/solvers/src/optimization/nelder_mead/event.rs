use tincan_core::{Model, Observer, OptimizationProblem};

use crate::optimization::EvalError;

use super::{Action, Point};

/// The simplex operation that produced an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Building the initial simplex around `x0`.
    Initial,

    /// Reflecting the worst vertex through the centroid.
    Reflect,

    /// Expanding beyond a reflection that beat the best vertex.
    Expand,

    /// Contracting toward the reflected point, outside the simplex.
    ContractOutside,

    /// Contracting toward the worst vertex, inside the simplex.
    ContractInside,

    /// Shrinking a vertex toward the best vertex.
    Shrink,
}

/// Events emitted by the Nelder–Mead solver.
///
/// Each event carries the simplex [`Step`] that requested the evaluation and
/// the iteration it belongs to (`0` while building the initial simplex).
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a trial point.
    Evaluated {
        /// The evaluated point (x and objective).
        point: Point<N>,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,

        /// The operation that produced this point.
        step: Step,

        /// The iteration this evaluation belongs to.
        iter: usize,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The x value where evaluation failed.
        x: [f64; N],

        /// The operation that produced this point.
        step: Step,

        /// The iteration this evaluation belongs to.
        iter: usize,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The x value where evaluation failed.
        x: [f64; N],

        /// The operation that produced this point.
        step: Step,

        /// The iteration this evaluation belongs to.
        iter: usize,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the objective, or `None` if evaluation failed.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { point, .. } => Some(point.objective),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Returns the simplex operation that produced this event.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Self::Evaluated { step, .. }
            | Self::ModelFailed { step, .. }
            | Self::ProblemFailed { step, .. } => *step,
        }
    }

    /// Returns the iteration this event belongs to.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. }
            | Self::ModelFailed { iter, .. }
            | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        x: [f64; N],
        step: Step,
        iter: usize,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    x,
                    step,
                    iter,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    x,
                    step,
                    iter,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
