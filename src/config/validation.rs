//! Configuration validation.
//!
//! Serde handles syntax; this module checks the values make sense before the
//! server is built. All problems are reported at once, not just the first.

use std::net::SocketAddr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::EchoConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("echo.path `{0}` must start with '/'")]
    PathNotAbsolute(String),

    #[error("echo.path `{0}` must not contain route parameters or wildcards")]
    PathHasParameters(String),

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("observability.log_level `{0}` is not a valid filter directive")]
    InvalidLogLevel(String),
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let path = &config.echo.path;
    if !path.starts_with('/') {
        errors.push(ValidationError::PathNotAbsolute(path.clone()));
    } else if has_route_syntax(path) {
        errors.push(ValidationError::PathHasParameters(path.clone()));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The echo route is a literal path; axum would treat these as captures or panic.
fn has_route_syntax(path: &str) -> bool {
    path.contains(['{', '}', '*'])
        || path.split('/').any(|segment| segment.starts_with(':'))
}
