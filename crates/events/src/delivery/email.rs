//! Alert notification delivery via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send one
//! plain-text email per alert. Configuration is loaded from environment
//! variables; if `SMTP_HOST` or `ALERT_EMAIL_TO` is not set,
//! [`EmailConfig::from_env`] returns `None` and alerts are only logged.

use async_trait::async_trait;

use crate::alerts::AlertNotice;
use crate::delivery::{Notifier, NotifyError};

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP submission port (implicit TLS).
const DEFAULT_SMTP_PORT: u16 = 465;

/// Port on which the transport uses implicit TLS instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "hostwatch@localhost";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 465).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Recipient of every alert email.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password (usually an application credential).
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` or `ALERT_EMAIL_TO` is not set,
    /// signalling that email delivery is not configured.
    ///
    /// | Variable         | Required | Default               |
    /// |------------------|----------|-----------------------|
    /// | `SMTP_HOST`      | yes      | --                    |
    /// | `ALERT_EMAIL_TO` | yes      | --                    |
    /// | `SMTP_PORT`      | no       | `465`                 |
    /// | `SMTP_FROM`      | no       | `hostwatch@localhost` |
    /// | `SMTP_USER`      | no       | --                    |
    /// | `SMTP_PASSWORD`  | no       | --                    |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let to_address = std::env::var("ALERT_EMAIL_TO").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: parse_smtp_port(std::env::var("SMTP_PORT").ok()),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            to_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// `SMTP_PORT` as a port number; unset or unparsable values fall back to
/// [`DEFAULT_SMTP_PORT`], the latter with a warning.
fn parse_smtp_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_SMTP_PORT;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(raw = %raw, default = DEFAULT_SMTP_PORT, "Invalid SMTP_PORT, using default");
        DEFAULT_SMTP_PORT
    })
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends alert notification emails via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    /// Create a new email delivery service with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the MIME message for `notice`.
    fn build_message(&self, notice: &AlertNotice) -> Result<lettre::Message, NotifyError> {
        use lettre::message::header::ContentType;

        lettre::Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.to_address.parse()?)
            .subject(notice.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(notice.body())
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

#[async_trait]
impl Notifier for EmailDelivery {
    async fn notify(&self, notice: &AlertNotice) -> Result<(), NotifyError> {
        use lettre::{
            transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
            Tokio1Executor,
        };

        let email = self.build_message(notice)?;

        let transport_builder = if self.config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
        };
        let mut transport_builder = transport_builder.port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(
            to = %self.config.to_address,
            metric = %notice.metric,
            "Alert email sent"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
