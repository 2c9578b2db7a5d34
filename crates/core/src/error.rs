#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Metrics unavailable: {0}")]
    MetricsUnavailable(String),
}
