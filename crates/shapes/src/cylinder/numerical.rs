use std::{convert::Infallible, f64::consts::PI};

use tincan_core::{Model, OptimizationProblem};

use crate::{Volume, geometry};

use super::CylinderKind;

/// Radius and height of a trial cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderDims {
    pub radius: f64,
    pub height: f64,
}

/// Maps cylinder dimensions to surface area.
#[derive(Debug, Clone, Copy)]
pub struct CylinderModel {
    kind: CylinderKind,
}

impl CylinderModel {
    #[must_use]
    pub fn new(kind: CylinderKind) -> Self {
        Self { kind }
    }
}

impl Model for CylinderModel {
    type Input = CylinderDims;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, dims: &CylinderDims) -> Result<f64, Self::Error> {
        Ok(geometry::cylinder_surface_area(
            self.kind,
            dims.radius,
            dims.height,
        ))
    }
}

/// Minimizes over the radius, deriving the height from a fixed volume.
///
/// Radii that are not strictly positive are infeasible.
#[derive(Debug, Clone, Copy)]
pub struct RadiusProblem {
    volume: Volume,
}

impl RadiusProblem {
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self { volume }
    }

    /// Height that gives a cylinder of radius `radius` the fixed volume.
    #[must_use]
    pub fn height_for(&self, radius: f64) -> f64 {
        self.volume.get() / (PI * radius * radius)
    }
}

impl OptimizationProblem<1> for RadiusProblem {
    type Input = CylinderDims;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<CylinderDims, Self::Error> {
        let radius = x[0];
        Ok(CylinderDims {
            radius,
            height: self.height_for(radius),
        })
    }

    fn objective(&self, dims: &CylinderDims, area: &f64) -> Result<f64, Self::Error> {
        if dims.radius <= 0.0 || !dims.height.is_finite() {
            return Ok(f64::INFINITY);
        }
        Ok(*area)
    }
}
