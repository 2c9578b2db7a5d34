use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::time::MissedTickBehavior;

use hostwatch_core::report::live_payload;

use crate::cycle::run_tick;
use crate::state::AppState;

/// Monotonic connection counter, used only to correlate log lines.
static NEXT_CONN_ID: AtomicU64 = AtomicU64::new(1);

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection gets its own metrics source and
/// ticker; nothing is shared with other clients except the alert tracker.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| stream_metrics(socket, state))
}

/// Push one snapshot per tick until the client goes away.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then
/// selects between:
///   1. The ticker: sample, evaluate, alert, push the formatted payload.
///   2. Inbound frames: a Close frame, end of stream or read error ends
///      the loop; anything else is ignored.
///
/// A failed push also ends the loop. Disconnects are normal termination.
async fn stream_metrics(socket: WebSocket, state: AppState) {
    let conn_id = NEXT_CONN_ID.fetch_add(1, Ordering::Relaxed);
    tracing::info!(conn_id, "WebSocket connected");

    let (mut sink, mut stream) = socket.split();
    let mut source = (state.sources)();
    let mut ticker = tokio::time::interval(state.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(tick) = run_tick(&mut source, &state.alerts, &state.thresholds) else {
                    continue;
                };
                let payload = live_payload(&tick.sample, &tick.violations, &state.thresholds);
                if let Err(e) = sink.send(Message::Text(payload.into())).await {
                    tracing::debug!(conn_id, error = %e, "WebSocket push failed");
                    break;
                }
            }
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::debug!(conn_id, error = %e, "WebSocket receive error");
                    break;
                }
            },
        }
    }

    tracing::info!(conn_id, "WebSocket disconnected");
}
