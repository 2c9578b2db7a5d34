//! Integration tests for the `/ws` live metrics stream.
//!
//! Each test runs the real router on an ephemeral port and connects with
//! a `tokio-tungstenite` client.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use hostwatch_core::report::{is_alert_payload, NORMAL_BANNER};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

async fn connect(addr: std::net::SocketAddr) -> Client {
    let (client, _response) = connect_async(format!("ws://{addr}/ws"))
        .await
        .expect("WebSocket handshake should succeed");
    client
}

/// Next text frame, skipping control frames.
async fn next_text(client: &mut Client) -> String {
    loop {
        let msg = tokio::time::timeout(RECV_TIMEOUT, client.next())
            .await
            .expect("timed out waiting for a push")
            .expect("stream ended")
            .expect("receive error");
        if msg.is_text() {
            return msg.to_text().unwrap().to_string();
        }
    }
}

// ---------------------------------------------------------------------------
// Test: quiet host gets only the normal banner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quiet_host_pushes_normal_banner() {
    let (state, _) = common::test_state(vec![common::sample(10.0)]);
    let addr = common::spawn_server(state).await;
    let mut client = connect(addr).await;

    for _ in 0..3 {
        assert_eq!(next_text(&mut client).await, NORMAL_BANNER);
    }
}

// ---------------------------------------------------------------------------
// Test: alert wrapper present iff the tick's sample violates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn alert_wrapper_tracks_each_ticks_violations() {
    // Per-connection source alternates quiet / hot / quiet / hot ...
    let (state, _) = common::test_state(vec![common::sample(10.0), common::sample(95.0)]);
    let addr = common::spawn_server(state).await;
    let mut client = connect(addr).await;

    for i in 0..4 {
        let payload = next_text(&mut client).await;
        let hot = i % 2 == 1;
        assert_eq!(is_alert_payload(&payload), hot, "tick {i}: {payload}");
        if hot {
            assert!(payload.contains("CPU Usage: 95.0%\n"));
            assert!(payload.contains("ALERT: CPU Usage EXCEEDED 90%"));
        }
    }
}

// ---------------------------------------------------------------------------
// Test: concurrent clients stream independently
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_clients_are_independent() {
    let (state, built) = common::test_state(vec![common::sample(10.0), common::sample(95.0)]);
    let addr = common::spawn_server(state).await;

    let mut first = connect(addr).await;
    let mut second = connect(addr).await;

    // Each connection starts its own script from the beginning.
    assert_eq!(next_text(&mut first).await, NORMAL_BANNER);
    assert_eq!(next_text(&mut second).await, NORMAL_BANNER);
    assert!(is_alert_payload(&next_text(&mut first).await));
    assert!(is_alert_payload(&next_text(&mut second).await));
    assert_eq!(built.load(Ordering::SeqCst), 2);

    // Dropping one client leaves the other streaming.
    first.close(None).await.unwrap();
    drop(first);

    for _ in 0..3 {
        next_text(&mut second).await;
    }
}

// ---------------------------------------------------------------------------
// Test: the server stops sampling once the client disconnects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn closed_client_stops_server_sampling() {
    let (state, taken) = common::counting_state(common::sample(10.0));
    let addr = common::spawn_server(state).await;
    let mut client = connect(addr).await;

    next_text(&mut client).await;
    next_text(&mut client).await;

    client.close(None).await.unwrap();
    // Drain until the server acknowledges the close and the stream ends.
    let _ = tokio::time::timeout(RECV_TIMEOUT, async {
        while let Some(Ok(_)) = client.next().await {}
    })
    .await;
    drop(client);

    tokio::time::sleep(common::TEST_TICK * 3).await;
    let after_close = taken.load(Ordering::SeqCst);
    assert!(after_close >= 2);

    tokio::time::sleep(common::TEST_TICK * 5).await;
    assert_eq!(taken.load(Ordering::SeqCst), after_close);
}
