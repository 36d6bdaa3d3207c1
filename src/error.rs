//! Top-level error type for starting and running the server.

use thiserror::Error;

use crate::config::ConfigError;
use crate::net::ListenerError;

/// Anything that can stop the echo server from starting or serving.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
