//! Solvers for optimization problems.
//!
//! An [`OptimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — derivative-free simplex search for small `N`, tolerant
//!   of infeasible regions marked with an infinite objective
//!
//! [`OptimizationProblem`]: tincan_core::OptimizationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod nelder_mead;
