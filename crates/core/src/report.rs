//! Text formatting shared by the console renderer and the live endpoint.

use crate::metric::{Metric, Sample};
use crate::thresholds::{Thresholds, ViolationSet};

/// Banner pushed to live clients while nothing is in violation.
pub const NORMAL_BANNER: &str = "<div class=\"normal\">All systems normal</div>";

const ALERT_OPEN: &str = "<div class=\"alert\">";
const ALERT_CLOSE: &str = "</div>";

/// The five metric lines, in display order.
pub fn metric_lines(sample: &Sample) -> Vec<String> {
    vec![
        format!("CPU Usage: {:.1}%", sample.cpu_percent),
        format!("Memory Usage: {:.1}%", sample.memory_percent),
        format!("Disk Usage: {:.1}%", sample.disk_percent),
        format!("Bytes Sent: {:.2} MB", sample.bytes_sent_mb),
        format!("Bytes Received: {:.2} MB", sample.bytes_received_mb),
    ]
}

/// One alert line, e.g. `ALERT: CPU Usage EXCEEDED 90%`.
pub fn alert_line(metric: Metric, thresholds: &Thresholds) -> String {
    format!(
        "ALERT: {} EXCEEDED {}{}",
        metric.label(),
        thresholds.limit(metric),
        metric.unit()
    )
}

/// Payload pushed to live clients on each tick.
///
/// With at least one violation, the metric and alert lines are wrapped in
/// an alert container; otherwise only [`NORMAL_BANNER`] is sent.
pub fn live_payload(sample: &Sample, violations: &ViolationSet, thresholds: &Thresholds) -> String {
    if violations.is_empty() {
        return NORMAL_BANNER.to_string();
    }

    let mut payload = String::from(ALERT_OPEN);
    for line in metric_lines(sample) {
        payload.push_str(&line);
        payload.push('\n');
    }
    for metric in violations.iter() {
        payload.push_str(&alert_line(metric, thresholds));
        payload.push('\n');
    }
    payload.push_str(ALERT_CLOSE);
    payload
}

/// Whether a live payload carries the alert container.
pub fn is_alert_payload(payload: &str) -> bool {
    payload.starts_with(ALERT_OPEN)
}
