//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use route_table::config::AppConfig;
use route_table::lifecycle::build_router;
use route_table::{HttpServer, ModuleRegistry};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A server running on an ephemeral port. Dropping it stops the server.
pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the HTTP API over the built-in route table.
pub async fn start_server() -> TestServer {
    let config = AppConfig::default();
    let router = build_router(&config, &ModuleRegistry::bundled()).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async {
            let _ = shutdown_rx.await;
        };
        let _ = HttpServer::new(config, router).run(listener, shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        _shutdown: shutdown_tx,
    }
}
