use std::convert::Infallible;

use tincan_core::{Model, OptimizationProblem};

use crate::{Volume, geometry};

use super::BoxKind;

/// Length, width and height of a trial box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps box dimensions to surface area.
#[derive(Debug, Clone, Copy)]
pub struct BoxModel {
    kind: BoxKind,
}

impl BoxModel {
    #[must_use]
    pub fn new(kind: BoxKind) -> Self {
        Self { kind }
    }
}

impl Model for BoxModel {
    type Input = BoxDims;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, dims: &BoxDims) -> Result<f64, Self::Error> {
        Ok(geometry::box_surface_area(
            self.kind,
            dims.length,
            dims.width,
            dims.height,
        ))
    }
}

/// Minimizes over the base `(length, width)`, deriving the height from a
/// fixed volume.
#[derive(Debug, Clone, Copy)]
pub struct BaseProblem {
    volume: Volume,
}

impl BaseProblem {
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self { volume }
    }

    /// Height that gives a `length × width` base the fixed volume.
    #[must_use]
    pub fn height_for(&self, length: f64, width: f64) -> f64 {
        self.volume.get() / (length * width)
    }
}

impl OptimizationProblem<2> for BaseProblem {
    type Input = BoxDims;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<BoxDims, Self::Error> {
        let [length, width] = *x;
        Ok(BoxDims {
            length,
            width,
            height: self.height_for(length, width),
        })
    }

    fn objective(&self, dims: &BoxDims, area: &f64) -> Result<f64, Self::Error> {
        let feasible = dims.length > 0.0
            && dims.width > 0.0
            && dims.height > 0.0
            && dims.height.is_finite();
        Ok(if feasible { *area } else { f64::INFINITY })
    }
}
