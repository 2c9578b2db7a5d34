//! Host metric identifiers and the per-tick [`Sample`] snapshot.

use serde::Serialize;

/// Bytes in one megabyte, as used for the network counters.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A monitored host metric.
///
/// The declaration order is the display order used by every front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
    NetworkSent,
    NetworkReceived,
}

impl Metric {
    /// All metrics in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Cpu,
        Metric::Memory,
        Metric::Disk,
        Metric::NetworkSent,
        Metric::NetworkReceived,
    ];

    /// Human-readable label used in alert lines and notification emails.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU Usage",
            Metric::Memory => "Memory Usage",
            Metric::Disk => "Disk Usage",
            Metric::NetworkSent => "Network Sent",
            Metric::NetworkReceived => "Network Received",
        }
    }

    /// Stable machine key, used as a structured logging field.
    pub fn key(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::Disk => "disk",
            Metric::NetworkSent => "network_sent",
            Metric::NetworkReceived => "network_received",
        }
    }

    /// Unit suffix for values and thresholds of this metric.
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Cpu | Metric::Memory | Metric::Disk => "%",
            Metric::NetworkSent | Metric::NetworkReceived => "MB",
        }
    }

    /// Position of this metric in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One reading of every monitored metric.
///
/// Produced fresh on each tick and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    /// Cumulative bytes sent since boot, in MB.
    pub bytes_sent_mb: f64,
    /// Cumulative bytes received since boot, in MB.
    pub bytes_received_mb: f64,
}

impl Sample {
    /// The observed value for `metric`.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu_percent,
            Metric::Memory => self.memory_percent,
            Metric::Disk => self.disk_percent,
            Metric::NetworkSent => self.bytes_sent_mb,
            Metric::NetworkReceived => self.bytes_received_mb,
        }
    }
}
