//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (ConfigOverrides)
//!     → validation.rs (semantic checks)
//!     → EchoConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so no file is required at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, ConfigOverrides};
pub use schema::{
    DumpEncoding, EchoConfig, EchoRouteConfig, LimitsConfig, ListenerConfig,
    ObservabilityConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
