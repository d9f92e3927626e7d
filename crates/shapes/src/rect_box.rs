mod numerical;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tincan_core::Observer;
use tincan_observers::TraceObserver;
use tincan_solvers::optimization::nelder_mead::{self, Action, Config};

use crate::{
    Error, Volume, geometry,
    landscape::{self, BoxPoint},
};

pub use numerical::{BaseProblem, BoxDims, BoxModel};

/// Relative tolerance used by [`RectangularBoxOptimizer::verify_volume`].
const VOLUME_RTOL: f64 = 1e-6;

/// Solver event type observed during a box's numerical solve.
pub type BoxEvent<'a> = nelder_mead::Event<'a, BoxModel, BaseProblem, 2>;

/// Whether a box has a top face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum BoxKind {
    /// Base and four walls.
    OpenTop,

    /// All six faces.
    Closed,
}

impl BoxKind {
    /// Maps an "open top" flag to a kind.
    #[must_use]
    pub fn from_open_top(open_top: bool) -> Self {
        if open_top { Self::OpenTop } else { Self::Closed }
    }
}

/// Box dimensions and the resulting surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct BoxSolution {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub surface_area: f64,
}

impl From<BoxSolution> for (f64, f64, f64, f64) {
    fn from(s: BoxSolution) -> Self {
        (s.length, s.width, s.height, s.surface_area)
    }
}

/// Finds the rectangular box of a fixed volume with the least surface area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularBoxOptimizer {
    volume: Volume,
    kind: BoxKind,
}

impl RectangularBoxOptimizer {
    /// Creates an optimizer for boxes holding `volume`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVolume`] if `volume` is not positive and finite.
    pub fn new(volume: f64, kind: BoxKind) -> Result<Self, Error> {
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
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    /// Returns the exact optimum.
    ///
    /// The base is always square. An open-top box is twice as wide as it is
    /// tall; a closed box is a cube.
    #[must_use]
    pub fn analytical_solution(&self) -> BoxSolution {
        let v = self.volume.get();
        let (side, height) = match self.kind {
            BoxKind::OpenTop => {
                let h = (v / 4.0).cbrt();
                (2.0 * h, h)
            }
            BoxKind::Closed => {
                let h = v.cbrt();
                (h, h)
            }
        };
        let surface_area = self.surface_area_for_dimensions(side, side, height);

        debug!(
            volume = v,
            kind = ?self.kind,
            side,
            height,
            surface_area,
            "analytical box"
        );

        BoxSolution {
            length: side,
            width: side,
            height,
            surface_area,
        }
    }

    /// Minimizes surface area numerically, logging solver progress at trace level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits.
    pub fn numerical_solution(&self) -> Result<BoxSolution, Error> {
        self.numerical_solution_observed(&Config::for_dims(2), TraceObserver::new("box"))
    }

    /// Minimizes surface area numerically with a custom solver config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits.
    pub fn numerical_solution_with(&self, config: &Config) -> Result<BoxSolution, Error> {
        self.numerical_solution_observed(config, ())
    }

    /// Minimizes surface area numerically, reporting every evaluation to `observer`.
    ///
    /// The search runs over `(length, width)` with the height fixed by the
    /// volume. It starts from the analytical side length for the box kind:
    /// `2 (V/4)^(1/3)` for an open top and `V^(1/3)` for a closed box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] if the minimizer hits its limits or the
    /// observer stops it, and [`Error::Solver`] if it ends with nothing to report.
    pub fn numerical_solution_observed<Obs>(
        &self,
        config: &Config,
        observer: Obs,
    ) -> Result<BoxSolution, Error>
    where
        Obs: for<'a> Observer<BoxEvent<'a>, Action>,
    {
        let v = self.volume.get();
        let model = BoxModel::new(self.kind);
        let problem = BaseProblem::new(self.volume);
        let side0 = match self.kind {
            BoxKind::OpenTop => 2.0 * (v / 4.0).cbrt(),
            BoxKind::Closed => v.cbrt(),
        };

        let solution = nelder_mead::minimize(&model, &problem, [side0, side0], config, observer)?;

        if !solution.status.is_converged() {
            warn!(
                volume = v,
                kind = ?self.kind,
                status = ?solution.status,
                iters = solution.iters,
                "box solve did not converge"
            );
            return Err(Error::NotConverged {
                status: solution.status,
                iters: solution.iters,
            });
        }

        let BoxDims {
            length,
            width,
            height,
        } = solution.snapshot.input;
        debug!(
            volume = v,
            kind = ?self.kind,
            length,
            width,
            height,
            surface_area = solution.objective,
            iters = solution.iters,
            evals = solution.evals,
            "numerical box"
        );

        Ok(BoxSolution {
            length,
            width,
            height,
            surface_area: solution.objective,
        })
    }

    /// Surface area of a box of this kind; the volume is not checked.
    #[must_use]
    pub fn surface_area_for_dimensions(&self, length: f64, width: f64, height: f64) -> f64 {
        geometry::box_surface_area(self.kind, length, width, height)
    }

    /// Returns `true` if `l w h` matches the volume to a relative `1e-6`.
    #[must_use]
    pub fn verify_volume(&self, length: f64, width: f64, height: f64) -> bool {
        geometry::is_close(
            geometry::box_volume(length, width, height),
            self.volume.get(),
            VOLUME_RTOL,
        )
    }

    /// Samples surface area for square-based boxes along the volume constraint.
    ///
    /// Side lengths run evenly from `0.1` to three times `V^(1/3)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSamples`] if `samples < 2`.
    pub fn landscape(&self, samples: usize) -> Result<Vec<BoxPoint>, Error> {
        let problem = BaseProblem::new(self.volume);
        let end = landscape::SPAN * self.volume.get().cbrt();

        Ok(landscape::linspace(landscape::START, end, samples)?
            .into_iter()
            .map(|length| {
                let height = problem.height_for(length, length);
                BoxPoint {
                    length,
                    height,
                    surface_area: self.surface_area_for_dimensions(length, length, height),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tincan_solvers::optimization::nelder_mead::Status;

    fn closed() -> RectangularBoxOptimizer {
        RectangularBoxOptimizer::new(1000.0, BoxKind::Closed).unwrap()
    }

    fn open_top() -> RectangularBoxOptimizer {
        RectangularBoxOptimizer::new(1000.0, BoxKind::OpenTop).unwrap()
    }

    #[test]
    fn closed_analytical_is_a_cube() {
        let s = closed().analytical_solution();

        assert_relative_eq!(s.length, 10.0, max_relative = 1e-12);
        assert_relative_eq!(s.width, 10.0, max_relative = 1e-12);
        assert_relative_eq!(s.height, 10.0, max_relative = 1e-12);
        assert_relative_eq!(s.surface_area, 600.0, max_relative = 1e-12);
    }

    #[test]
    fn open_top_analytical_is_twice_as_wide_as_tall() {
        let s = open_top().analytical_solution();

        assert_relative_eq!(s.height, 250.0_f64.cbrt());
        assert_relative_eq!(s.length, 2.0 * s.height);
        assert_relative_eq!(s.width, s.length);
        assert_relative_eq!(s.surface_area, 12.0 * s.height * s.height, max_relative = 1e-12);
        assert!(open_top().verify_volume(s.length, s.width, s.height));
    }

    #[test]
    fn numerical_agrees_with_analytical() {
        for opt in [closed(), open_top()] {
            let exact = opt.analytical_solution();
            let found = opt.numerical_solution().unwrap();

            assert_relative_eq!(found.length, exact.length, epsilon = 1e-2);
            assert_relative_eq!(found.width, exact.width, epsilon = 1e-2);
            assert_relative_eq!(found.height, exact.height, epsilon = 1e-2);
            assert_relative_eq!(found.surface_area, exact.surface_area, max_relative = 1e-6);
            assert!(opt.verify_volume(found.length, found.width, found.height));
        }
    }

    #[test]
    fn iteration_limit_is_reported() {
        let config = Config::new(1, 100, 0.0, 0.0).unwrap();

        let result = closed().numerical_solution_with(&config);

        assert!(matches!(
            result,
            Err(Error::NotConverged {
                status: Status::MaxIters,
                iters: 1
            })
        ));
    }

    #[test]
    fn evaluation_limit_is_reported() {
        let config = Config::new(100, 3, 1e-4, 1e-4).unwrap();

        let result = open_top().numerical_solution_with(&config);

        assert!(matches!(
            result,
            Err(Error::NotConverged {
                status: Status::MaxEvals,
                ..
            })
        ));
    }

    #[test]
    fn observer_sees_both_variables() {
        let mut widths = Vec::new();
        let observer = |event: &BoxEvent<'_>| {
            widths.push(event.x()[1]);
            None
        };

        closed()
            .numerical_solution_observed(&Config::for_dims(2), observer)
            .unwrap();

        assert_relative_eq!(widths[0], 10.0, max_relative = 1e-12);
        assert_relative_eq!(widths[1], 10.0, max_relative = 1e-12);
        assert_relative_eq!(widths[2], 10.5, max_relative = 1e-12);
    }

    #[test]
    fn landscape_minimum_is_near_the_cube() {
        let opt = closed();
        let points = opt.landscape(301).unwrap();

        let best = points
            .iter()
            .min_by(|a, b| a.surface_area.total_cmp(&b.surface_area))
            .unwrap();

        assert_relative_eq!(best.length, 10.0, epsilon = 0.2);
        for p in &points {
            assert!(opt.verify_volume(p.length, p.length, p.height));
        }
    }

    #[test]
    fn landscape_rejects_too_few_samples() {
        assert!(matches!(closed().landscape(1), Err(Error::InvalidSamples(1))));
    }

    #[test]
    fn kind_from_flag() {
        assert_eq!(BoxKind::from_open_top(true), BoxKind::OpenTop);
        assert_eq!(BoxKind::from_open_top(false), BoxKind::Closed);
    }
}
