//! External delivery channels for alert notifications.

use async_trait::async_trait;

use crate::alerts::AlertNotice;

pub mod email;

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Sends an [`AlertNotice`] somewhere outside the process.
///
/// Implementations make a single attempt; the caller decides what a
/// failure means.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &AlertNotice) -> Result<(), NotifyError>;
}
