#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use hostwatch_agent::{MetricsSource, SourceFactory};
use hostwatch_api::server::serve_on;
use hostwatch_api::state::AppState;
use hostwatch_core::{CoreError, Sample, Thresholds};
use hostwatch_events::AlertTracker;

/// Tick period used by tests; short so streams produce frames quickly.
pub const TEST_TICK: Duration = Duration::from_millis(20);

/// Replays a fixed list of samples, cycling forever.
pub struct ScriptedSource {
    samples: Vec<Sample>,
    next: usize,
}

impl MetricsSource for ScriptedSource {
    fn sample(&mut self) -> Result<Sample, CoreError> {
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        Ok(sample)
    }
}

/// A factory handing each caller its own [`ScriptedSource`], plus a
/// counter of how many sources were built.
pub fn scripted_factory(samples: Vec<Sample>) -> (SourceFactory, Arc<AtomicUsize>) {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&built);
    let factory: SourceFactory = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::new(ScriptedSource {
            samples: samples.clone(),
            next: 0,
        }) as Box<dyn MetricsSource>
    });
    (factory, built)
}

/// Returns the same sample every tick and bumps a shared counter, so
/// tests can tell whether any connection is still sampling.
pub struct CountingSource {
    sample: Sample,
    taken: Arc<AtomicUsize>,
}

impl MetricsSource for CountingSource {
    fn sample(&mut self) -> Result<Sample, CoreError> {
        self.taken.fetch_add(1, Ordering::SeqCst);
        Ok(self.sample)
    }
}

/// Build an [`AppState`] whose sources all share one sample counter.
pub fn counting_state(sample: Sample) -> (AppState, Arc<AtomicUsize>) {
    let taken = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&taken);
    let sources: SourceFactory = Arc::new(move || {
        Box::new(CountingSource {
            sample,
            taken: Arc::clone(&counter),
        }) as Box<dyn MetricsSource>
    });
    let state = AppState {
        sources,
        alerts: Arc::new(AlertTracker::new(None)),
        thresholds: Thresholds::DEFAULT,
        tick_interval: TEST_TICK,
    };
    (state, taken)
}

pub fn sample(cpu: f64) -> Sample {
    Sample {
        cpu_percent: cpu,
        memory_percent: 40.0,
        disk_percent: 40.0,
        bytes_sent_mb: 5.0,
        bytes_received_mb: 5.0,
    }
}

/// Build an [`AppState`] with a scripted source and the test tick.
pub fn test_state(samples: Vec<Sample>) -> (AppState, Arc<AtomicUsize>) {
    let (factory, built) = scripted_factory(samples);
    let state = AppState {
        sources: factory,
        alerts: Arc::new(AlertTracker::new(None)),
        thresholds: Thresholds::DEFAULT,
        tick_interval: TEST_TICK,
    };
    (state, built)
}

/// Serve `state` on an ephemeral local port and return its address.
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_on(listener, state, std::future::pending()));
    addr
}

/// Send a GET request through the router without a network socket.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
