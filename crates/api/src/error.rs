use std::net::SocketAddr;

/// Errors that end a front end. Per-tick failures never surface here;
/// they are logged inside the loops.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The async runtime could not be started.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The live endpoint could not bind its listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Writing to the terminal failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Convenience type alias for front-end return values.
pub type AppResult<T> = Result<T, AppError>;
