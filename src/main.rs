//! HTTP echo server.
//!
//! ```text
//!     Client ── POST|PUT|PATCH /echo ──▶ ┌──────────┐   ┌───────────────┐   ┌────────────┐
//!                                        │ listener │──▶│ axum + layers │──▶│ echo       │
//!     Client ◀── 200, same bytes ─────── └──────────┘   │ id/trace/limit│   │ handler    │
//!                                                       └───────────────┘   └─────┬──────┘
//!                                                                                 ▼
//!                                                                         stdout (body dump)
//! ```

use std::path::PathBuf;

use clap::Parser;

use echo_server::config::{load_config, ConfigOverrides, EchoConfig};
use echo_server::{net, observability, EchoServer, Shutdown};

#[derive(Parser)]
#[command(name = "echo-server", version)]
#[command(about = "HTTP endpoint that returns every request body unchanged", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, e.g. 0.0.0.0:8000.
    #[arg(short, long)]
    bind: Option<String>,

    /// Path the echo route is mounted on.
    #[arg(long)]
    path: Option<String>,

    /// Log filter directive (overridden by RUST_LOG).
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn load(self) -> echo_server::Result<EchoConfig> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => EchoConfig::default(),
        };

        let overrides = ConfigOverrides {
            bind_address: self.bind,
            path: self.path,
            log_level: self.log_level,
            json_logs: self.json_logs,
        };
        Ok(overrides.apply(config)?)
    }
}

async fn run(cli: Cli) -> echo_server::Result<()> {
    let config = cli.load()?;
    observability::init_logging(&config.observability)?;

    tracing::info!("echo-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        path = %config.echo.path,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = EchoServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse()).await?;
    Ok(())
}
