#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    BoxKind, BoxSolution, CylinderKind, CylinderOptimizer, CylinderSolution, Error,
    RectangularBoxOptimizer,
};

/// Identifies one of the four compared shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum ShapeLabel {
    CylinderClosed,
    CylinderOpen,
    BoxOpen,
    BoxClosed,
}

impl ShapeLabel {
    /// All labels, in comparison order.
    pub const ALL: [Self; 4] = [
        Self::CylinderClosed,
        Self::CylinderOpen,
        Self::BoxOpen,
        Self::BoxClosed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CylinderClosed => "cylinder_closed",
            Self::CylinderOpen => "cylinder_open",
            Self::BoxOpen => "box_open",
            Self::BoxClosed => "box_closed",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensions of an optimal shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(untagged))]
pub enum Dimensions {
    Cylinder { radius: f64, height: f64 },
    Box { length: f64, width: f64, height: f64 },
}

/// One shape's optimum within a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct ShapeRecord {
    pub dimensions: Dimensions,
    pub surface_area: f64,

    /// `height / radius` for cylinders, `length / height` for boxes.
    pub dimensions_ratio: f64,
}

impl From<CylinderSolution> for ShapeRecord {
    fn from(s: CylinderSolution) -> Self {
        Self {
            dimensions: Dimensions::Cylinder {
                radius: s.radius,
                height: s.height,
            },
            surface_area: s.surface_area,
            dimensions_ratio: s.height / s.radius,
        }
    }
}

impl From<BoxSolution> for ShapeRecord {
    fn from(s: BoxSolution) -> Self {
        Self {
            dimensions: Dimensions::Box {
                length: s.length,
                width: s.width,
                height: s.height,
            },
            surface_area: s.surface_area,
            dimensions_ratio: s.length / s.height,
        }
    }
}

/// Analytical optima of all four shapes for a single volume.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Comparison {
    pub cylinder_closed: ShapeRecord,
    pub cylinder_open: ShapeRecord,
    pub box_open: ShapeRecord,
    pub box_closed: ShapeRecord,
}

impl Comparison {
    #[must_use]
    pub fn get(&self, label: ShapeLabel) -> &ShapeRecord {
        match label {
            ShapeLabel::CylinderClosed => &self.cylinder_closed,
            ShapeLabel::CylinderOpen => &self.cylinder_open,
            ShapeLabel::BoxOpen => &self.box_open,
            ShapeLabel::BoxClosed => &self.box_closed,
        }
    }

    /// Iterates over every record in [`ShapeLabel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeLabel, &ShapeRecord)> {
        ShapeLabel::ALL.into_iter().map(|label| (label, self.get(label)))
    }

    /// Returns the shape with the least surface area.
    ///
    /// Ties go to the shape listed first.
    #[must_use]
    pub fn best(&self) -> (ShapeLabel, &ShapeRecord) {
        let mut best = (ShapeLabel::CylinderClosed, &self.cylinder_closed);
        for (label, record) in self.iter().skip(1) {
            if record.surface_area < best.1.surface_area {
                best = (label, record);
            }
        }
        best
    }
}

/// Computes the analytical optimum of every shape at `volume`.
///
/// # Errors
///
/// Returns [`Error::InvalidVolume`] if `volume` is not positive and finite.
pub fn compare_shapes(volume: f64) -> Result<Comparison, Error> {
    let cylinder = |kind| CylinderOptimizer::new(volume, kind).map(|o| o.analytical_solution());
    let rect_box =
        |kind| RectangularBoxOptimizer::new(volume, kind).map(|o| o.analytical_solution());

    let comparison = Comparison {
        cylinder_closed: cylinder(CylinderKind::Closed)?.into(),
        cylinder_open: cylinder(CylinderKind::Open)?.into(),
        box_open: rect_box(BoxKind::OpenTop)?.into(),
        box_closed: rect_box(BoxKind::Closed)?.into(),
    };

    tracing::debug!(volume, best = %comparison.best().0, "compared shapes");

    Ok(comparison)
}
