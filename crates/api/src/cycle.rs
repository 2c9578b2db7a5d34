//! The sample → evaluate → alert step shared by both front ends.

use hostwatch_agent::MetricsSource;
use hostwatch_core::{evaluate, Sample, Thresholds, ViolationSet};
use hostwatch_events::AlertTracker;

/// Result of one successful tick.
#[derive(Debug, Clone)]
pub struct Tick {
    pub sample: Sample,
    pub violations: ViolationSet,
}

/// Run one cycle. Returns `None` when sampling failed; the failure is
/// logged and the caller skips rendering for this tick. Alert delivery
/// is dispatched in the background, so this never waits on SMTP.
pub fn run_tick<S>(source: &mut S, tracker: &AlertTracker, thresholds: &Thresholds) -> Option<Tick>
where
    S: MetricsSource + ?Sized,
{
    let sample = match source.sample() {
        Ok(sample) => sample,
        Err(e) => {
            tracing::warn!(error = %e, "Skipping tick -- sampling failed");
            return None;
        }
    };

    let violations = evaluate(&sample, thresholds);
    tracker.observe(&sample, &violations, thresholds);

    Some(Tick { sample, violations })
}
