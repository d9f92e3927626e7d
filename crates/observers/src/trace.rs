use tincan_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// An observer that logs every solver event through [`tracing`].
///
/// Each event is emitted at `TRACE` level under the `tincan::solver` target,
/// with the observer's label, a running evaluation count, the solver
/// iteration, and the objective (NaN for failed evaluations). The observer
/// never returns an action.
///
/// Pass `&mut TraceObserver` to keep access to [`evals`](Self::evals) after
/// the solve completes.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: &'static str,
    evals: usize,
}

impl TraceObserver {
    /// Creates an observer whose log lines are tagged with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, evals: 0 }
    }

    /// Returns the label attached to each log line.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evals += 1;
        let objective = event.objective();
        if objective.is_nan() {
            tracing::trace!(
                target: "tincan::solver",
                solver = self.label,
                eval = self.evals,
                iter = event.iteration(),
                "evaluation failed"
            );
        } else {
            tracing::trace!(
                target: "tincan::solver",
                solver = self.label,
                eval = self.evals,
                iter = event.iteration(),
                objective,
                "evaluated"
            );
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
