use std::marker::PhantomData;

use tincan_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::{
    Action, Config, Error, Event, Point, Solution, Status, Step,
    simplex::{CHI, PSI, RHO, Simplex, Vertex, affine, initial_vertices},
};

/// Core Nelder–Mead search implementation.
pub(super) fn search<M, P, Obs, const N: usize>(
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
    let mut evaluator = Evaluator::new(model, problem, observer);

    let mut vertices = Vec::with_capacity(N + 1);
    for x in initial_vertices(x0) {
        match evaluator.eval(x, Step::Initial, 0)? {
            Some(vertex) => vertices.push(vertex),
            None => {
                return Simplex::new(vertices).into_solution(
                    Status::StoppedByObserver,
                    0,
                    evaluator.evals,
                );
            }
        }
    }
    let mut simplex = Simplex::new(vertices);

    let mut iters = 0;
    let status = loop {
        if simplex.is_converged(config) {
            break Status::Converged;
        }
        if evaluator.evals >= config.max_evals() {
            break Status::MaxEvals;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        iters += 1;
        if let Flow::StopEarly = iterate(&mut simplex, &mut evaluator, iters)? {
            break Status::StoppedByObserver;
        }
    };

    simplex.into_solution(status, iters, evaluator.evals)
}

enum Flow {
    Continue,
    StopEarly,
}

/// Performs one reflect/expand/contract/shrink iteration.
fn iterate<M, P, Obs, const N: usize>(
    simplex: &mut Simplex<M::Input, M::Output, N>,
    evaluator: &mut Evaluator<'_, M, P, Obs, N>,
    iter: usize,
) -> Result<Flow, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let centroid = simplex.centroid();
    let best = simplex.best();
    let worst = simplex.worst();

    let Some(reflected) = evaluator.eval(affine(&centroid, &worst.x, RHO), Step::Reflect, iter)?
    else {
        return Ok(Flow::StopEarly);
    };
    let f_reflected = reflected.point.objective;

    if f_reflected < best.objective {
        let Some(expanded) =
            evaluator.eval(affine(&centroid, &worst.x, RHO * CHI), Step::Expand, iter)?
        else {
            return Ok(Flow::StopEarly);
        };
        if expanded.point.objective < f_reflected {
            simplex.replace_worst(expanded);
        } else {
            simplex.replace_worst(reflected);
        }
        return Ok(Flow::Continue);
    }

    if f_reflected < simplex.second_worst().objective {
        simplex.replace_worst(reflected);
        return Ok(Flow::Continue);
    }

    let contracted = if f_reflected < worst.objective {
        let x = affine(&centroid, &worst.x, PSI * RHO);
        let Some(vertex) = evaluator.eval(x, Step::ContractOutside, iter)? else {
            return Ok(Flow::StopEarly);
        };
        (vertex.point.objective <= f_reflected).then_some(vertex)
    } else {
        let x = affine(&centroid, &worst.x, -PSI);
        let Some(vertex) = evaluator.eval(x, Step::ContractInside, iter)? else {
            return Ok(Flow::StopEarly);
        };
        (vertex.point.objective < worst.objective).then_some(vertex)
    };

    if let Some(vertex) = contracted {
        simplex.replace_worst(vertex);
        return Ok(Flow::Continue);
    }

    for (offset, x) in simplex.shrink_targets().into_iter().enumerate() {
        let Some(vertex) = evaluator.eval(x, Step::Shrink, iter)? else {
            simplex.finish_shrink();
            return Ok(Flow::StopEarly);
        };
        simplex.replace(offset + 1, vertex);
    }
    simplex.finish_shrink();

    Ok(Flow::Continue)
}

// ============================================================================
// Eval + observe helper
// ============================================================================

/// Evaluates trial points, notifies the observer, and counts evaluations.
struct Evaluator<'m, M, P, Obs, const N: usize> {
    model: &'m M,
    problem: &'m P,
    observer: Obs,
    evals: usize,
    _dims: PhantomData<[f64; N]>,
}

impl<'m, M, P, Obs, const N: usize> Evaluator<'m, M, P, Obs, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    fn new(model: &'m M, problem: &'m P, observer: Obs) -> Self {
        Self {
            model,
            problem,
            observer,
            evals: 0,
            _dims: PhantomData,
        }
    }

    /// Evaluates at `x`, emits an event, and applies the observer's action.
    ///
    /// Returns `Ok(None)` if the observer asked to stop early.
    fn eval(
        &mut self,
        x: [f64; N],
        step: Step,
        iter: usize,
    ) -> Result<Option<Vertex<M::Input, M::Output, N>>, Error> {
        self.evals += 1;

        match evaluate(self.model, self.problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                let event = Event::Evaluated {
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    step,
                    iter,
                };
                match self.observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(None),
                    Some(Action::AssumeWorse) => Ok(Some(Vertex {
                        point: Point::infeasible(x),
                        snapshot: None,
                    })),
                    None => Ok(Some(Vertex {
                        point,
                        snapshot: Some(eval.snapshot),
                    })),
                }
            }
            Err(e) => match Event::<M, P, N>::emit_failure(x, step, iter, &e, &mut self.observer) {
                Some(Action::StopEarly) => Ok(None),
                Some(Action::AssumeWorse) => Ok(Some(Vertex {
                    point: Point::infeasible(x),
                    snapshot: None,
                })),
                None => Err(e.into()),
            },
        }
    }
}
