//! HTTP echo server library.
//!
//! Serves one route that answers POST, PUT and PATCH with the request body,
//! byte for byte, after dumping it to the log.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::EchoConfig;
pub use error::{Error, Result};
pub use http::EchoServer;
pub use lifecycle::Shutdown;
