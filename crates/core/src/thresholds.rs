//! Threshold evaluation engine for host metrics.
//!
//! Pure logic -- no I/O. The caller samples the host and passes the
//! [`Sample`] in; alert de-duplication lives with the caller too.

use serde::Serialize;

use crate::metric::{Metric, Sample};

/// Static upper bounds per metric. A value strictly above its bound is a
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    /// Shared bound for both cumulative network counters, in MB.
    pub network_mb: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        cpu: 90.0,
        memory: 80.0,
        disk: 90.0,
        network_mb: 100.0,
    };

    /// The bound applied to `metric`.
    pub fn limit(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu,
            Metric::Memory => self.memory,
            Metric::Disk => self.disk,
            Metric::NetworkSent | Metric::NetworkReceived => self.network_mb,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The metrics of one sample that exceed their threshold, in
/// [`Metric::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSet {
    metrics: Vec<Metric>,
}

impl ViolationSet {
    pub fn contains(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.metrics.iter().copied()
    }
}

/// Decide which metrics of `sample` violate `thresholds`.
///
/// Strict greater-than: a value equal to its bound is not a violation.
pub fn evaluate(sample: &Sample, thresholds: &Thresholds) -> ViolationSet {
    let metrics = Metric::ALL
        .into_iter()
        .filter(|metric| sample.value(*metric) > thresholds.limit(*metric))
        .collect();
    ViolationSet { metrics }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
