//! Network layer.
//!
//! # Data Flow
//! ```text
//! ListenerConfig.bind_address
//!     → listener.rs (parse, bind tokio TcpListener)
//!     → http::EchoServer::run (axum accept loop, HTTP/1.1 + cleartext HTTP/2)
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
