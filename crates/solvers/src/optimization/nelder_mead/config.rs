use thiserror::Error;

/// Iterations and evaluations allowed per solver variable by default.
const BUDGET_PER_DIM: usize = 200;

/// Configuration for the Nelder–Mead solver.
///
/// The search converges once every vertex lies within `x_abs_tol` of the best
/// vertex in each coordinate and every objective lies within `f_abs_tol` of
/// the best objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    max_evals: usize,
    x_abs_tol: f64,
    f_abs_tol: f64,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_evals must be positive")]
    MaxEvals,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("f_abs_tol must be finite and non-negative")]
    FAbs,
}

impl Default for Config {
    /// Defaults for a single solver variable.
    fn default() -> Self {
        Self::for_dims(1)
    }
}

impl Config {
    /// Creates a new config with validated limits and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_evals` is zero or any tolerance is negative or
    /// non-finite.
    pub fn new(
        max_iters: usize,
        max_evals: usize,
        x_abs_tol: f64,
        f_abs_tol: f64,
    ) -> Result<Self, ConfigError> {
        if max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !f_abs_tol.is_finite() || f_abs_tol < 0.0 {
            return Err(ConfigError::FAbs);
        }

        Ok(Self {
            max_iters,
            max_evals,
            x_abs_tol,
            f_abs_tol,
        })
    }

    /// Returns the default config scaled for `dims` solver variables.
    ///
    /// Limits are 200 iterations and 200 evaluations per variable, and both
    /// tolerances are `1e-4`.
    #[must_use]
    pub fn for_dims(dims: usize) -> Self {
        let budget = BUDGET_PER_DIM * dims.max(1);
        // Known-good values, unwrap is safe
        Self::new(budget, budget, 1e-4, 1e-4).unwrap()
    }

    /// Returns the maximum number of simplex iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the maximum number of objective evaluations.
    #[must_use]
    pub fn max_evals(&self) -> usize {
        self.max_evals
    }

    /// Returns the absolute tolerance for vertex spread.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the absolute tolerance for objective spread.
    #[must_use]
    pub fn f_abs_tol(&self) -> f64 {
        self.f_abs_tol
    }
}
