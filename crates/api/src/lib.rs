//! hostwatch front ends.
//!
//! Exposes the building blocks (CLI, config, state, the console renderer,
//! routes and WebSocket streaming) so integration tests and the binary
//! entrypoint can both access them.

pub mod cli;
pub mod config;
pub mod console;
pub mod cycle;
pub mod error;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
pub mod ws;
