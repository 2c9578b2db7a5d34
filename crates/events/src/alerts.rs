//! Sticky per-metric alerting.
//!
//! Each metric moves from "not alerted" to "alerted" at most once per
//! process. The first tick on which a metric violates its threshold
//! triggers one notification; later violations of the same metric,
//! including after it recovered, are only rendered, never re-sent.
//!
//! A failed delivery still leaves the metric alerted: there is no retry,
//! so a broken mail path cannot turn into a notification loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hostwatch_core::{Metric, Sample, Thresholds, ViolationSet};

use crate::delivery::Notifier;

// ---------------------------------------------------------------------------
// AlertState
// ---------------------------------------------------------------------------

/// One "already notified" flag per [`Metric`], initially all clear.
///
/// Flags only ever go from `false` to `true`. Transitions use
/// compare-and-set so concurrent ticks agree on a single winner.
#[derive(Debug, Default)]
pub struct AlertState {
    flags: [AtomicBool; Metric::ALL.len()],
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `metric` as alerted.
    ///
    /// Returns `true` only for the caller that performed the transition.
    pub fn try_mark(&self, metric: Metric) -> bool {
        self.flags[metric.index()]
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_alerted(&self, metric: Metric) -> bool {
        self.flags[metric.index()].load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// AlertNotice
// ---------------------------------------------------------------------------

/// The content of a single alert notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertNotice {
    pub metric: Metric,
    /// Observed value that triggered the alert.
    pub value: f64,
    /// Threshold that was exceeded.
    pub threshold: f64,
    /// Host the sample was taken on, if known.
    pub host: Option<String>,
}

impl AlertNotice {
    pub fn subject(&self) -> String {
        format!("[hostwatch] ALERT: {} threshold exceeded", self.metric.label())
    }

    pub fn body(&self) -> String {
        let unit = unit_suffix(self.metric);
        let mut body = format!(
            "{} is at {:.1}{unit}, above the configured threshold of {}{unit}.",
            self.metric.label(),
            self.value,
            self.threshold,
        );
        if let Some(host) = &self.host {
            body.push_str(&format!("\nHost: {host}"));
        }
        body
    }
}

fn unit_suffix(metric: Metric) -> &'static str {
    match metric {
        Metric::NetworkSent | Metric::NetworkReceived => " MB",
        _ => "%",
    }
}

// ---------------------------------------------------------------------------
// AlertTracker
// ---------------------------------------------------------------------------

/// Owns the [`AlertState`] and the optional [`Notifier`].
///
/// Share it behind an `Arc` when several loops observe violations.
pub struct AlertTracker {
    state: AlertState,
    notifier: Option<Arc<dyn Notifier>>,
    host: Option<String>,
}

impl AlertTracker {
    /// Create a tracker. Without a notifier, new alerts are only logged.
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self {
            state: AlertState::new(),
            notifier,
            host: None,
        }
    }

    /// Attach the host name included in notifications.
    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host;
        self
    }

    pub fn state(&self) -> &AlertState {
        &self.state
    }

    /// Record this tick's violations and notify for first-time alerts.
    ///
    /// Returns the metrics that transitioned to alerted on this call.
    /// The state transition happens here; delivery runs on a spawned task
    /// so a slow or hung mail server never stalls the caller's tick.
    /// Delivery failures are logged and never propagated.
    pub fn observe(
        &self,
        sample: &Sample,
        violations: &ViolationSet,
        thresholds: &Thresholds,
    ) -> Vec<Metric> {
        let mut fired = Vec::new();

        for metric in violations.iter() {
            if !self.state.try_mark(metric) {
                continue;
            }
            fired.push(metric);

            let notice = AlertNotice {
                metric,
                value: sample.value(metric),
                threshold: thresholds.limit(metric),
                host: self.host.clone(),
            };

            tracing::warn!(
                metric = %metric,
                value = notice.value,
                threshold = notice.threshold,
                "Threshold exceeded"
            );

            if let Some(notifier) = &self.notifier {
                dispatch(Arc::clone(notifier), notice);
            }
        }

        fired
    }
}

/// Send `notice` in the background. Without a runtime the notice is
/// dropped and logged.
fn dispatch(notifier: Arc<dyn Notifier>, notice: AlertNotice) {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::warn!(metric = %notice.metric, "No async runtime, alert notification dropped");
        return;
    };

    handle.spawn(async move {
        if let Err(e) = notifier.notify(&notice).await {
            tracing::warn!(
                metric = %notice.metric,
                error = %e,
                "Alert notification failed, not retrying"
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
