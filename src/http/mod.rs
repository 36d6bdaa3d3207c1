//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, HTTP/1.1 + cleartext HTTP/2)
//!     → request.rs (assign x-request-id)
//!     → body limit / timeout layers
//!     → echo.rs (dump body via dump.rs, return it unchanged)
//!     → Send to client
//! ```

pub mod dump;
pub mod echo;
pub mod request;
pub mod server;

pub use dump::BodyDump;
pub use echo::{echo_handler, EchoSettings};
pub use request::X_REQUEST_ID;
pub use server::EchoServer;
