//! Shared utilities for integration testing.

use std::net::SocketAddr;

use echo_server::{net, EchoConfig, EchoServer, Shutdown};
use tokio::task::JoinHandle;

/// A running echo server bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// URL of the given path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start an echo server with `config`, overriding the bind address.
pub async fn start_echo_server(mut config: EchoConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = EchoServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never reuses connections across tests or goes through a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
