//! Surface area sampled along a shape's volume constraint.

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Lower end of every landscape's sample range.
pub(crate) const START: f64 = 0.1;

/// Upper end of a landscape range, as a multiple of the characteristic length.
pub(crate) const SPAN: f64 = 3.0;

/// A cylinder on its volume constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct CylinderPoint {
    pub radius: f64,
    pub height: f64,
    pub surface_area: f64,
}

/// A square-based box (`length == width`) on its volume constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct BoxPoint {
    pub length: f64,
    pub height: f64,
    pub surface_area: f64,
}

/// Returns `samples` evenly spaced values from `start` to `end`, inclusive.
///
/// # Errors
///
/// Returns [`Error::InvalidSamples`] if `samples < 2`.
pub(crate) fn linspace(start: f64, end: f64, samples: usize) -> Result<Vec<f64>, Error> {
    if samples < 2 {
        return Err(Error::InvalidSamples(samples));
    }

    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (samples - 1) as f64;

    Ok((0..samples)
        .map(|i| {
            if i == samples - 1 {
                end
            } else {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                start + i * step
            }
        })
        .collect())
}
