//! `hostwatch-agent` library crate.
//!
//! Host sampling: the [`MetricsSource`] seam used by both front ends and
//! the `sysinfo`-backed [`SystemCollector`] that implements it.

pub mod collector;
pub mod source;

pub use collector::{host_name, SystemCollector};
pub use source::{system_source_factory, MetricsSource, SourceFactory};
