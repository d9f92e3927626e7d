use tincan_core::Observer;

use crate::traits::{HasIteration, HasObjective};

/// One recorded solver event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// The solver iteration (`0` for initialization).
    pub iteration: usize,

    /// The objective, or NaN if the evaluation failed.
    pub objective: f64,
}

/// An observer that records the objective of every event.
///
/// Useful for inspecting convergence after a solve. Pass `&mut History` as the
/// observer so the records remain available afterwards. The observer never
/// returns an action.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single event.
    pub fn record(&mut self, iteration: usize, objective: f64) {
        self.records.push(Record {
            iteration,
            objective,
        });
    }

    /// Returns all records in observation order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the lowest objective seen after each event.
    ///
    /// Failed evaluations (NaN) leave the running minimum unchanged. Entries
    /// before the first successful evaluation are `f64::INFINITY`.
    #[must_use]
    pub fn best_so_far(&self) -> Vec<f64> {
        self.records
            .iter()
            .scan(f64::INFINITY, |best, record| {
                if record.objective < *best {
                    *best = record.objective;
                }
                Some(*best)
            })
            .collect()
    }

    /// Returns the highest iteration recorded, if any.
    #[must_use]
    pub fn last_iteration(&self) -> Option<usize> {
        self.records.iter().map(|r| r.iteration).max()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.iteration(), event.objective());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasObjective + HasIteration,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
