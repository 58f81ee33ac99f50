//! Host startup and serving errors.

/// Errors that stop the host process.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },
    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
