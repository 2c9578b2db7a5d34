use std::sync::Arc;

use hostwatch_core::{CoreError, Sample};

use crate::collector::SystemCollector;

/// Something that can take a fresh [`Sample`] of the host.
///
/// Implementations may keep state between calls (CPU usage is measured
/// over the window between two reads).
pub trait MetricsSource: Send {
    fn sample(&mut self) -> Result<Sample, CoreError>;
}

impl MetricsSource for Box<dyn MetricsSource> {
    fn sample(&mut self) -> Result<Sample, CoreError> {
        (**self).sample()
    }
}

/// Builds one independent [`MetricsSource`] per consumer, e.g. one per
/// live connection.
pub type SourceFactory = Arc<dyn Fn() -> Box<dyn MetricsSource> + Send + Sync>;

/// Factory producing a fresh [`SystemCollector`] for each caller.
pub fn system_source_factory() -> SourceFactory {
    Arc::new(|| Box::new(SystemCollector::new()) as Box<dyn MetricsSource>)
}
