//! Numerical solvers for the Tincan workspace.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `tincan-core`, and report progress through an [`Observer`].
//!
//! - [`optimization`] — minimizing an objective over `N` solver variables
//!
//! [`Model`]: tincan_core::Model
//! [`Observer`]: tincan_core::Observer

pub mod optimization;
