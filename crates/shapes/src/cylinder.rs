mod numerical;

use std::f64::consts::PI;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tincan_core::Observer;
use tincan_observers::TraceObserver;
use tincan_solvers::optimization::nelder_mead::{self, Action, Config};

use crate::{
    Error, Volume, geometry,
    landscape::{self, CylinderPoint},
};

pub use numerical::{CylinderDims, CylinderModel, RadiusProblem};

/// Relative tolerance used by [`CylinderOptimizer::verify_volume`].
const VOLUME_RTOL: f64 = 1e-6;

/// Solver event type observed during a cylinder's numerical solve.
pub type CylinderEvent<'a> = nelder_mead::Event<'a, CylinderModel, RadiusProblem, 1>;

/// Whether a cylinder has a lid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum CylinderKind {
    /// Top and bottom discs, like a can.
    Closed,

    /// Bottom disc only, like a cup.
    Open,
}

impl CylinderKind {
    /// Maps a "has a lid" flag to a kind.
    #[must_use]
    pub fn from_closed(closed: bool) -> Self {
        if closed { Self::Closed } else { Self::Open }
    }
}

/// Cylinder dimensions and the resulting surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct CylinderSolution {
    pub radius: f64,
    pub height: f64,
    pub surface_area: f64,
}

impl From<CylinderSolution> for (f64, f64, f64) {
    fn from(s: CylinderSolution) -> Self {
        (s.radius, s.height, s.surface_area)
    }
}

/// Finds the cylinder of a fixed volume with the least surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptimizer {
    volume: Volume,
    kind: CylinderKind,
}

impl CylinderOptimizer {
    /// Creates an optimizer for cylinders holding `volume`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVolume`] if `volume` is not positive and finite.
    pub fn new(volume: f64, kind: CylinderKind) -> Result<Self, Error> {
        Ok(Self {
            volume: Volume::new(volume)?,
            kind,
        })
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn kind(&self) -> CylinderKind {
        self.kind
    }

    /// Returns the exact optimum.
    ///
    /// A closed cylinder is optimal when its height equals its diameter, and
    /// an open one when its height equals its radius.
    #[must_use]
    pub fn analytical_solution(&self) -> CylinderSolution {
        let v = self.volume.get();
        let (radius, height) = match self.kind {
            CylinderKind::Closed => {
                let r = (v / (2.0 * PI)).cbrt();
                (r, 2.0 * r)
            }
            CylinderKind::Open => {
                let r = (v / PI).cbrt();
                (r, r)
            }
        };
        let surface_area = self.surface_area_for_dimensions(radius, height);

        debug!(
            volume = v,
            kind = ?self.kind,
            radius,
            height,
            surface_area,
            "analytical cylinder"
        );

        CylinderSolution {
            radius,
            height,
            surface_area,
        }
    }

    /// Minimizes surface area numerically, logging solver progress at trace level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits.
    pub fn numerical_solution(&self) -> Result<CylinderSolution, Error> {
        self.numerical_solution_observed(&Config::for_dims(1), TraceObserver::new("cylinder"))
    }

    /// Minimizes surface area numerically with a custom solver config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits.
    pub fn numerical_solution_with(&self, config: &Config) -> Result<CylinderSolution, Error> {
        self.numerical_solution_observed(config, ())
    }

    /// Minimizes surface area numerically, reporting every evaluation to `observer`.
    ///
    /// The search runs over the radius alone, starting from `(V/π)^(1/3)`, with
    /// the height fixed by the volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits or the
    /// observer stops it, and [`Error::Solver`] if it ends with nothing to report.
    pub fn numerical_solution_observed<Obs>(
        &self,
        config: &Config,
        observer: Obs,
    ) -> Result<CylinderSolution, Error>
    where
        Obs: for<'a> Observer<CylinderEvent<'a>, Action>,
    {
        let v = self.volume.get();
        let model = CylinderModel::new(self.kind);
        let problem = RadiusProblem::new(self.volume);
        let r0 = (v / PI).cbrt();

        let solution = nelder_mead::minimize(&model, &problem, [r0], config, observer)?;

        if !solution.status.is_converged() {
            warn!(
                volume = v,
                kind = ?self.kind,
                status = ?solution.status,
                iters = solution.iters,
                "cylinder solve did not converge"
            );
            return Err(Error::NotConverged {
                status: solution.status,
                iters: solution.iters,
            });
        }

        let CylinderDims { radius, height } = solution.snapshot.input;
        debug!(
            volume = v,
            kind = ?self.kind,
            radius,
            height,
            surface_area = solution.objective,
            iters = solution.iters,
            evals = solution.evals,
            "numerical cylinder"
        );

        Ok(CylinderSolution {
            radius,
            height,
            surface_area: solution.objective,
        })
    }

    /// Surface area of a cylinder of this kind; the volume is not checked.
    #[must_use]
    pub fn surface_area_for_dimensions(&self, radius: f64, height: f64) -> f64 {
        geometry::cylinder_surface_area(self.kind, radius, height)
    }

    /// Returns `true` if `π r² h` matches the volume to a relative `1e-6`.
    #[must_use]
    pub fn verify_volume(&self, radius: f64, height: f64) -> bool {
        geometry::is_close(
            geometry::cylinder_volume(radius, height),
            self.volume.get(),
            VOLUME_RTOL,
        )
    }

    /// Samples surface area along the volume constraint.
    ///
    /// Radii run evenly from `0.1` to three times `(V/π)^(1/3)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSamples`] if `samples < 2`.
    pub fn landscape(&self, samples: usize) -> Result<Vec<CylinderPoint>, Error> {
        let problem = RadiusProblem::new(self.volume);
        let end = landscape::SPAN * (self.volume.get() / PI).cbrt();

        Ok(landscape::linspace(landscape::START, end, samples)?
            .into_iter()
            .map(|radius| {
                let height = problem.height_for(radius);
                CylinderPoint {
                    radius,
                    height,
                    surface_area: self.surface_area_for_dimensions(radius, height),
                }
            })
            .collect())
    }
}
