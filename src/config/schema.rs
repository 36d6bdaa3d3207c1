//! Configuration schema definitions.
//!
//! Every section derives Serde traits and carries `#[serde(default)]`, so an
//! empty TOML document yields a runnable configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Echo route settings.
    pub echo: EchoRouteConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// How body bytes are rendered on the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DumpEncoding {
    /// `b'...'`: printable ASCII kept, everything else `\xNN`.
    ///
    /// Always single-quoted with `'` escaped; it never switches to `b"..."`.
    #[default]
    Escaped,
    /// Lowercase hex pairs.
    Hex,
}

/// Echo route configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EchoRouteConfig {
    /// Path the echo handler is mounted on.
    pub path: String,

    /// Rendering used when the body is logged.
    pub dump_encoding: DumpEncoding,

    /// Maximum number of body bytes rendered in the log line (0 = unlimited).
    ///
    /// The whole body is logged by default; a non-zero value opts into truncation.
    pub max_logged_bytes: usize,
}

impl Default for EchoRouteConfig {
    fn default() -> Self {
        Self {
            path: "/echo".to_string(),
            dump_encoding: DumpEncoding::Escaped,
            max_logged_bytes: 0,
        }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time to read the body and respond) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g. "info" or "echo_server=debug,tower_http=info").
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
