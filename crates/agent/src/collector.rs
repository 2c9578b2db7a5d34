//! `sysinfo`-based host metrics collection.
//!
//! [`SystemCollector`] keeps a [`System`] handle alive between calls so
//! CPU utilisation is measured across the interval since the previous
//! refresh. The very first reading in a process may therefore be
//! degenerate (typically `0.0`); callers accept that.

use std::path::Path;

use sysinfo::{Disk, Disks, Networks, System};

use hostwatch_core::{CoreError, Sample, BYTES_PER_MB};

use crate::source::MetricsSource;

/// Samples CPU, memory, root filesystem and network counters.
pub struct SystemCollector {
    system: System,
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCollector {
    /// Create a collector and prime the CPU measurement window.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        system.refresh_memory();
        tracing::debug!(cpus = system.cpus().len(), "System collector initialised");
        Self { system }
    }

    fn cpu_percent(&mut self) -> f64 {
        self.system.refresh_cpu_usage();
        f64::from(self.system.global_cpu_usage())
    }

    fn memory_percent(&mut self) -> Result<f64, CoreError> {
        self.system.refresh_memory();
        percent_used(self.system.used_memory(), self.system.total_memory())
            .ok_or_else(|| CoreError::MetricsUnavailable("total memory reported as zero".into()))
    }

    fn disk_percent(&self) -> Result<f64, CoreError> {
        let disks = Disks::new_with_refreshed_list();
        let disk = root_disk(disks.list()).ok_or_else(|| {
            CoreError::MetricsUnavailable("no mounted filesystem found".into())
        })?;

        // sysinfo reports only total and available space, so blocks reserved
        // for root count as used.
        let total = disk.total_space();
        let used = total.saturating_sub(disk.available_space());
        percent_used(used, total).ok_or_else(|| {
            CoreError::MetricsUnavailable(format!(
                "filesystem at {} reports zero size",
                disk.mount_point().display()
            ))
        })
    }

    fn network_mb(&self) -> (f64, f64) {
        let networks = Networks::new_with_refreshed_list();
        let (sent, received) = networks
            .list()
            .values()
            .fold((0u64, 0u64), |(sent, received), data| {
                (
                    sent.saturating_add(data.total_transmitted()),
                    received.saturating_add(data.total_received()),
                )
            });
        (sent as f64 / BYTES_PER_MB, received as f64 / BYTES_PER_MB)
    }
}

impl MetricsSource for SystemCollector {
    fn sample(&mut self) -> Result<Sample, CoreError> {
        let cpu_percent = self.cpu_percent();
        let memory_percent = self.memory_percent()?;
        let disk_percent = self.disk_percent()?;
        let (bytes_sent_mb, bytes_received_mb) = self.network_mb();

        Ok(Sample {
            cpu_percent,
            memory_percent,
            disk_percent,
            bytes_sent_mb,
            bytes_received_mb,
        })
    }
}

/// Host name reported by the OS, used to label alert notifications.
pub fn host_name() -> Option<String> {
    System::host_name()
}

/// The filesystem mounted at `/`, falling back to the first listed disk.
fn root_disk(disks: &[Disk]) -> Option<&Disk> {
    disks
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| disks.first())
}

/// `used / total` as a percentage; `None` when `total` is zero.
fn percent_used(used: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_used_computes_ratio() {
        assert_eq!(percent_used(50, 200), Some(25.0));
        assert_eq!(percent_used(0, 10), Some(0.0));
        assert_eq!(percent_used(10, 10), Some(100.0));
    }

    #[test]
    fn percent_used_rejects_zero_total() {
        assert_eq!(percent_used(0, 0), None);
    }
}
