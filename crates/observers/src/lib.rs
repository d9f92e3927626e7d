//! Reusable observers for the Tincan workspace.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasIteration`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — logs every event through `tracing` at `TRACE` level
//! - [`History`] — records the objective of every event for later inspection
//!
//! [`Observer`]: tincan_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod history;
mod trace;

pub use history::{History, Record};
pub use trace::TraceObserver;
