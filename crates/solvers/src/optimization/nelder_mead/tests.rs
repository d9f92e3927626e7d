use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use tincan_core::{Model, OptimizationProblem};

use super::{Action, Config, Error, Event, Status, Step, minimize, minimize_unobserved};

/// Objective: use the model output directly.
struct ObjectiveOutput;

impl<const N: usize> OptimizationProblem<N> for ObjectiveOutput {
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

/// Quadratic bowl: f(x) = (x - 3)².
struct Quadratic;

impl Model for Quadratic {
    type Input = [f64; 1];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok((x[0] - 3.0).powi(2))
    }
}

/// Rosenbrock's banana function, minimum at (1, 1).
struct Rosenbrock;

impl Model for Rosenbrock {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        let [a, b] = *x;
        Ok((1.0 - a).powi(2) + 100.0 * (b - a * a).powi(2))
    }
}

/// f(x) = x + 1/x on x > 0, infeasible elsewhere. Minimum at x = 1.
struct PositiveOnly;

impl Model for PositiveOnly {
    type Input = [f64; 1];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] <= 0.0 {
            return Ok(f64::INFINITY);
        }
        Ok(x[0] + 1.0 / x[0])
    }
}

#[test]
fn minimizes_quadratic() {
    let solution = minimize_unobserved(&Quadratic, &ObjectiveOutput, [1.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-3);
    assert_relative_eq!(solution.objective, 0.0, epsilon = 1e-4);
    assert_relative_eq!(solution.snapshot.output, solution.objective);
}

#[test]
fn minimizes_rosenbrock() {
    let config = Config::new(2000, 4000, 1e-8, 1e-10).unwrap();

    let solution = minimize_unobserved(&Rosenbrock, &ObjectiveOutput, [-1.2, 1.0], &config)
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-4);
}

#[test]
fn steers_away_from_infinite_objective() {
    let solution = minimize_unobserved(&PositiveOnly, &ObjectiveOutput, [5.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-2);
    assert_relative_eq!(solution.objective, 2.0, epsilon = 1e-4);
}

#[test]
fn initial_simplex_is_reported_first() {
    let mut steps = Vec::new();
    let observer = |event: &Event<'_, _, _, 2>| {
        steps.push((event.step(), event.iter()));
        None
    };

    minimize(
        &Rosenbrock,
        &ObjectiveOutput,
        [-1.2, 1.0],
        &Config::for_dims(2),
        observer,
    )
    .expect("should complete");

    assert_eq!(steps[..3], [(Step::Initial, 0); 3]);
    assert_eq!(steps[3], (Step::Reflect, 1));
}

#[test]
fn observer_can_stop_early() {
    let mut eval_count = 0;
    let observer = |_event: &Event<'_, _, _, 1>| {
        eval_count += 1;
        if eval_count >= 5 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = minimize(&Quadratic, &ObjectiveOutput, [1.0], &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.evals, 5);
    assert_eq!(eval_count, 5);
}

#[test]
fn stopping_before_any_success_is_an_error() {
    let observer = |_event: &Event<'_, _, _, 1>| Some(Action::StopEarly);

    let result = minimize(&Quadratic, &ObjectiveOutput, [1.0], &Config::default(), observer);

    assert!(matches!(result, Err(Error::NoSuccessfulEvaluation)));
}

#[test]
fn assume_worse_steers_search() {
    // True minimum is at x = 3, but every point above 2 is rejected.
    let observer = |event: &Event<'_, _, _, 1>| {
        if event.x()[0] > 2.0 {
            Some(Action::AssumeWorse)
        } else {
            None
        }
    };

    let solution = minimize(&Quadratic, &ObjectiveOutput, [0.5], &Config::default(), observer)
        .expect("should complete");

    assert!(
        solution.x[0] <= 2.0,
        "search should stay left of 2, got {}",
        solution.x[0]
    );
    assert!(solution.objective >= 1.0);
}

#[test]
fn reports_iteration_limit() {
    let config = Config::new(3, 100, 0.0, 0.0).unwrap();

    let solution =
        minimize_unobserved(&Quadratic, &ObjectiveOutput, [1.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
}

#[test]
fn reports_evaluation_limit() {
    let config = Config::new(100, 6, 0.0, 0.0).unwrap();

    let solution =
        minimize_unobserved(&Rosenbrock, &ObjectiveOutput, [-1.2, 1.0], &config).expect("should finish");

    assert_eq!(solution.status, Status::MaxEvals);
    assert!(solution.evals >= 6);
}

// --- Evaluation failures ---

/// Quadratic with minimum at x = 3 that fails above a threshold.
struct ThresholdModel {
    threshold: f64,
}

#[derive(Debug, Clone, Error)]
#[error("model failed at x={x} (threshold={threshold})")]
struct ThresholdError {
    x: f64,
    threshold: f64,
}

impl Model for ThresholdModel {
    type Input = [f64; 1];
    type Output = f64;
    type Error = ThresholdError;

    fn call(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        if x[0] > self.threshold {
            return Err(ThresholdError {
                x: x[0],
                threshold: self.threshold,
            });
        }
        Ok((x[0] - 3.0).powi(2))
    }
}

#[test]
fn failure_without_action_errors() {
    // The second initial vertex (5% above x0) crosses the threshold.
    let model = ThresholdModel { threshold: 10.0 };

    let result = minimize_unobserved(&model, &ObjectiveOutput, [9.9], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn failure_recovers_with_assume_worse() {
    let model = ThresholdModel { threshold: 4.0 };

    let observer = |event: &Event<'_, _, _, 1>| {
        if matches!(event, Event::ModelFailed { .. }) {
            Some(Action::AssumeWorse)
        } else {
            None
        }
    };

    let solution = minimize(&model, &ObjectiveOutput, [3.9], &Config::default(), observer)
        .expect("should recover and converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 1e-3);
}

#[test]
fn failure_event_carries_attempted_point() {
    let model = ThresholdModel { threshold: 10.0 };

    let mut failed_at = None;
    let observer = |event: &Event<'_, ThresholdModel, _, 1>| {
        if let Event::ModelFailed { x, error, .. } = event {
            failed_at = Some((x[0], error.threshold));
            return Some(Action::StopEarly);
        }
        None
    };

    let solution = minimize(&model, &ObjectiveOutput, [9.9], &Config::default(), observer)
        .expect("first vertex succeeded");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.x[0], 9.9);
    let (x, threshold) = failed_at.expect("failure observed");
    assert_relative_eq!(x, 9.9 * 1.05);
    assert_relative_eq!(threshold, 10.0);
}
