//! `hostwatch` -- host resource monitor.
//!
//! Samples CPU, memory, root filesystem and network counters once per
//! second and shows them either as a live console display (`--cli`) or as
//! a live web page pushed over WebSocket (`--gui`, port 6100). Threshold
//! violations are highlighted and, when SMTP is configured, reported by
//! email once per metric.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default   | Description                      |
//! |------------------|----------|-----------|----------------------------------|
//! | `HOST`           | no       | `0.0.0.0` | Live endpoint bind address       |
//! | `PORT`           | no       | `6100`    | Live endpoint bind port          |
//! | `SMTP_HOST`      | no       | --        | Enables email alerts when set    |
//! | `ALERT_EMAIL_TO` | no       | --        | Alert recipient (required for email) |
//! | `SMTP_PORT`      | no       | `465`     | SMTP submission port             |
//! | `SMTP_FROM`      | no       | `hostwatch@localhost` | Sender address       |
//! | `SMTP_USER`      | no       | --        | SMTP username                    |
//! | `SMTP_PASSWORD`  | no       | --        | SMTP application credential      |

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostwatch_api::cli::{Cli, Mode, USAGE_HINT};
use hostwatch_api::server;

fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    // Logs go to stderr so the console display owns stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hostwatch_api=info,hostwatch_events=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(mode) = cli.mode() else {
        println!("{USAGE_HINT}");
        return ExitCode::SUCCESS;
    };

    tracing::info!(?mode, "Starting hostwatch");

    let result = match mode {
        Mode::Console => server::run_console(),
        Mode::Live => server::run_live(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hostwatch stopped");
            ExitCode::FAILURE
        }
    }
}
