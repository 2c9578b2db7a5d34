//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary and the
//! integration tests use the exact same routes and middleware.

use axum::routing::get;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::state::AppState;
use crate::ws;

/// Build the full application [`Router`]:
///
/// - `GET /` -- live view page
/// - `GET /health` -- liveness probe
/// - `GET /ws` -- WebSocket metrics stream
pub fn build_app_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::page::router())
        .merge(routes::health::router())
        .route("/ws", get(ws::ws_handler))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
