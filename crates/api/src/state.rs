use std::sync::Arc;
use std::time::Duration;

use hostwatch_agent::SourceFactory;
use hostwatch_core::Thresholds;
use hostwatch_events::AlertTracker;

use crate::config::TICK_INTERVAL;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Builds a fresh metrics source for every live connection.
    pub sources: SourceFactory,
    /// Process-wide alert de-duplication, shared by all connections.
    pub alerts: Arc<AlertTracker>,
    pub thresholds: Thresholds,
    /// Period of each connection's push loop.
    pub tick_interval: Duration,
}

impl AppState {
    pub fn new(sources: SourceFactory, alerts: Arc<AlertTracker>) -> Self {
        Self {
            sources,
            alerts,
            thresholds: Thresholds::DEFAULT,
            tick_interval: TICK_INTERVAL,
        }
    }
}
