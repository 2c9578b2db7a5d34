//! WebSocket live metrics stream.
//!
//! Provides the HTTP upgrade handler mounted at `/ws`.

mod handler;

pub use handler::ws_handler;
