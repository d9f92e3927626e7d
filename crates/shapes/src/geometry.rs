//! Surface-area and volume formulas for the supported shapes.
//!
//! These are plain formulas with no validation: callers decide whether
//! negative or zero dimensions are meaningful.

use std::f64::consts::PI;

use crate::{BoxKind, CylinderKind};

/// Absolute tolerance used by [`is_close`].
pub const ABS_TOL: f64 = 1e-8;

/// Surface area of a cylinder with radius `r` and height `h`.
///
/// A closed cylinder has two circular ends, an open one has only a base.
#[must_use]
pub fn cylinder_surface_area(kind: CylinderKind, r: f64, h: f64) -> f64 {
    let ends = match kind {
        CylinderKind::Closed => 2.0,
        CylinderKind::Open => 1.0,
    };
    ends * PI * r * r + 2.0 * PI * r * h
}

/// Volume of a cylinder: `π r² h`.
#[must_use]
pub fn cylinder_volume(r: f64, h: f64) -> f64 {
    PI * r * r * h
}

/// Surface area of a rectangular box with base `l × w` and height `h`.
#[must_use]
pub fn box_surface_area(kind: BoxKind, l: f64, w: f64, h: f64) -> f64 {
    let faces = match kind {
        BoxKind::OpenTop => 1.0,
        BoxKind::Closed => 2.0,
    };
    faces * l * w + 2.0 * l * h + 2.0 * w * h
}

/// Volume of a rectangular box: `l w h`.
#[must_use]
pub fn box_volume(l: f64, w: f64, h: f64) -> f64 {
    l * w * h
}

/// Returns `true` if `|a - b| <= ABS_TOL + rtol * |b|`.
///
/// The comparison is asymmetric: `b` is the reference value.
#[must_use]
pub fn is_close(a: f64, b: f64, rtol: f64) -> bool {
    (a - b).abs() <= ABS_TOL + rtol * b.abs()
}
