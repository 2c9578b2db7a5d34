//! Live console display.
//!
//! Redraws the whole screen once per tick: the five metric lines followed
//! by one red line per violated threshold. Runs until the shutdown future
//! resolves (Ctrl-C in production). The terminal is never switched into
//! raw or alternate-screen mode, so there is nothing to restore on exit.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use tokio::time::MissedTickBehavior;

use hostwatch_agent::MetricsSource;
use hostwatch_core::report::{alert_line, metric_lines};
use hostwatch_core::{Sample, Thresholds, ViolationSet};
use hostwatch_events::AlertTracker;

use crate::cycle::run_tick;
use crate::error::AppResult;

/// Printed once the loop has been interrupted.
pub const STOPPED_MESSAGE: &str = "Stopped monitoring.";

/// Clear the screen and draw one frame.
pub fn render_frame<W: Write>(
    out: &mut W,
    sample: &Sample,
    violations: &ViolationSet,
    thresholds: &Thresholds,
) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    for line in metric_lines(sample) {
        queue!(out, Print(line), Print("\n"))?;
    }
    for metric in violations.iter() {
        queue!(
            out,
            PrintStyledContent(alert_line(metric, thresholds).red()),
            Print("\n")
        )?;
    }

    out.flush()
}

/// Drive the console loop until `shutdown` resolves.
pub async fn run<S, W, F>(
    mut source: S,
    tracker: &AlertTracker,
    thresholds: &Thresholds,
    tick_interval: Duration,
    out: &mut W,
    shutdown: F,
) -> AppResult<()>
where
    S: MetricsSource,
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = ticker.tick() => {
                let Some(tick) = run_tick(&mut source, tracker, thresholds) else {
                    continue;
                };
                if let Err(e) = render_frame(out, &tick.sample, &tick.violations, thresholds) {
                    tracing::warn!(error = %e, "Failed to draw console frame");
                }
            }
        }
    }

    writeln!(out, "\n{STOPPED_MESSAGE}")?;
    out.flush()?;
    Ok(())
}
