//! Minimum-surface-area dimensions for containers of a fixed volume.
//!
//! Two shape families are supported, each in two variants:
//!
//! - [`CylinderOptimizer`] — closed cans and open-top cups
//! - [`RectangularBoxOptimizer`] — open-top trays and closed boxes
//!
//! Every optimizer offers a closed-form [`analytical_solution`] and a
//! [`numerical_solution`] that eliminates the volume constraint and minimizes
//! the remaining surface-area function with Nelder–Mead simplex search.
//! [`compare_shapes`] collects all four analytical optima for one volume.
//!
//! [`analytical_solution`]: CylinderOptimizer::analytical_solution
//! [`numerical_solution`]: CylinderOptimizer::numerical_solution
//!
//! # Example
//!
//! ```rust
//! use tincan_shapes::{CylinderKind, CylinderOptimizer};
//!
//! let can = CylinderOptimizer::new(1000.0, CylinderKind::Closed)?;
//! let best = can.analytical_solution();
//!
//! assert!((best.height - 2.0 * best.radius).abs() < 1e-9);
//! assert!(can.verify_volume(best.radius, best.height));
//! # Ok::<(), tincan_shapes::Error>(())
//! ```

mod compare;
mod cylinder;
mod error;
mod landscape;
mod rect_box;
mod volume;

pub mod geometry;

pub use compare::{Comparison, Dimensions, ShapeLabel, ShapeRecord, compare_shapes};
pub use cylinder::{
    CylinderDims, CylinderEvent, CylinderKind, CylinderModel, CylinderOptimizer,
    CylinderSolution, RadiusProblem,
};
pub use error::Error;
pub use landscape::{BoxPoint, CylinderPoint};
pub use rect_box::{
    BaseProblem, BoxDims, BoxEvent, BoxKind, BoxModel, BoxSolution, RectangularBoxOptimizer,
};
pub use volume::Volume;

pub use tincan_solvers::optimization::nelder_mead::{Action, Config};
