//! Process bootstrap for both front ends.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use hostwatch_agent::{system_source_factory, SystemCollector};
use hostwatch_core::Thresholds;
use hostwatch_events::{AlertTracker, EmailConfig, EmailDelivery, Notifier};

use crate::config::{ServerConfig, TICK_INTERVAL};
use crate::console;
use crate::error::{AppError, AppResult};
use crate::router::build_app_router;
use crate::state::AppState;

/// Build the alert tracker, with email delivery when SMTP is configured.
pub fn build_alert_tracker() -> AlertTracker {
    let notifier: Option<Arc<dyn Notifier>> = match EmailConfig::from_env() {
        Some(config) => {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                to = %config.to_address,
                "Email alerts enabled"
            );
            Some(Arc::new(EmailDelivery::new(config)) as Arc<dyn Notifier>)
        }
        None => {
            tracing::info!("Email alerts disabled (SMTP_HOST / ALERT_EMAIL_TO not set)");
            None
        }
    };

    AlertTracker::new(notifier).with_host(hostwatch_agent::host_name())
}

/// Run the console display on a single-threaded runtime until Ctrl-C.
pub fn run_console() -> AppResult<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    runtime.block_on(async {
        let tracker = build_alert_tracker();
        let mut stdout = std::io::stdout();
        console::run(
            SystemCollector::new(),
            &tracker,
            &Thresholds::DEFAULT,
            TICK_INTERVAL,
            &mut stdout,
            shutdown_signal(),
        )
        .await
    })
}

/// Run the live endpoint on a multi-threaded runtime until SIGINT/SIGTERM.
pub fn run_live() -> AppResult<()> {
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    runtime.block_on(async {
        let state = AppState::new(system_source_factory(), Arc::new(build_alert_tracker()));
        serve(&config, state).await
    })
}

/// Bind the configured address and serve until a shutdown signal.
pub async fn serve(config: &ServerConfig, state: AppState) -> AppResult<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    tracing::info!(%addr, "Live endpoint listening");

    serve_on(listener, state, shutdown_signal()).await?;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_app_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Serve)
}

/// Wait for a termination signal.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler
/// cannot be installed, that signal source is logged and ignored.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
