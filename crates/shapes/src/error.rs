use thiserror::Error;

use tincan_solvers::optimization::nelder_mead;

/// Errors returned by the shape optimizers.
#[derive(Debug, Error)]
pub enum Error {
    /// The volume was zero, negative, or not finite.
    #[error("volume must be positive and finite, got {0}")]
    InvalidVolume(f64),

    /// The minimizer stopped before meeting its tolerances.
    #[error("minimizer did not converge: {status:?} after {iters} iterations")]
    NotConverged {
        status: nelder_mead::Status,
        iters: usize,
    },

    /// The minimizer failed outright.
    #[error("minimizer failed")]
    Solver(#[from] nelder_mead::Error),

    /// A landscape was requested with fewer than two samples.
    #[error("landscape needs at least 2 samples, got {0}")]
    InvalidSamples(usize),
}
