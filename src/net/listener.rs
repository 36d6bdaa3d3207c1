//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind the tokio listener handed to `axum::serve`
//! - Report the actual local address (port 0 resolves here)

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Configured address does not parse.
    #[error("invalid bind address `{address}`: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener at the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| ListenerError::InvalidAddress {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ListenerError::Bind { address, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        };
        let listener = bind(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn rejects_unparsable_address() {
        let config = ListenerConfig {
            bind_address: "localhost".into(),
        };
        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, ListenerError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn reports_address_in_use() {
        let first = bind(&ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        })
        .await
        .unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(&ListenerConfig {
            bind_address: taken.to_string(),
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ListenerError::Bind { address, .. } if address == taken));
    }
}
