//! Hello Service
//!
//! Serves a greeting, a liveness message and the running build number.
//!
//! ```text
//!   Client Request
//!   ─────────────────▶ TraceLayer → RequestIdLayer → TimeoutLayer
//!                                                       │
//!                                                       ▼
//!                                               RouteTable entry
//!                                        (GET /, /health, /version)
//!                                                       │
//!                                                       ▼
//!   Client Response                                 handlers::render
//!   ◀───────────────────────────────────────── (EnvProvider → BUILD_NUMBER)
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use hello_service::config::resolve_config;
use hello_service::lifecycle::{wait_for_signal, Shutdown};
use hello_service::observability::{logging, metrics};
use hello_service::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "hello-service")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "HELLO_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long, env = "HELLO_SERVICE_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.bind).with_context(|| {
        match &args.config {
            Some(path) => format!("loading config from {}", path.display()),
            None => "validating default config".to_string(),
        }
    })?;

    logging::init_logging(&config.observability).context("initializing logging")?;

    tracing::info!("hello-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        version = %config.build.version,
        build_number_env = %config.build.build_number_env,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .with_context(|| {
                format!(
                    "parsing metrics address {}",
                    config.observability.metrics_address
                )
            })?;
        metrics::init_metrics(addr).context("starting metrics exporter")?;
    }

    let server = HttpServer::new(config.clone())?;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .with_context(|| format!("binding {}", config.listener.bind_address))?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
