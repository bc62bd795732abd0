//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hello_service::config::{ServiceConfig, StaticEnv};
use hello_service::{HttpServer, RouteTable, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on a loopback port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Build a server with the standard routes and a fixed environment.
pub fn server_with_env(env: StaticEnv) -> HttpServer {
    HttpServer::with_parts(ServiceConfig::default(), &RouteTable::standard(), Arc::new(env))
        .unwrap()
}

/// Start a server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(env: StaticEnv) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = server_with_env(env);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never reuses connections.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
