//! `hostwatch-core` -- shared domain types and pure logic.
//!
//! Holds the host [`Sample`] model, the static [`Thresholds`], the
//! threshold evaluator and the text formatting shared by the console
//! and live front ends. Nothing in here performs I/O.

pub mod error;
pub mod metric;
pub mod report;
pub mod thresholds;

pub use error::CoreError;
pub use metric::{Metric, Sample, BYTES_PER_MB};
pub use thresholds::{evaluate, Thresholds, ViolationSet};
