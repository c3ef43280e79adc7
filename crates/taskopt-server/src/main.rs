//! taskopt Server

use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::sync::Mutex;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use taskopt_server::{http, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    // Initialize tracing
    init_tracing(&config)?;

    let http_addr: SocketAddr = config.http_addr.parse()?;
    let state = AppState::new(&config);
    let router = http::create_router(state);

    info!(
        http_addr = %http_addr,
        search_timeout_secs = ?config.search_timeout_secs,
        "Starting taskopt server"
    );

    let listener = TcpListener::bind(http_addr).await?;
    info!("HTTP server listening on {}", http_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("taskopt server stopped");
    Ok(())
}

fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter = with_service_directives(EnvFilter::from_default_env())?;

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }

    Ok(())
}

/// Service logs and per-request lines at info, everything else per `RUST_LOG`.
fn with_service_directives(filter: EnvFilter) -> Result<EnvFilter, ParseError> {
    Ok(filter
        .add_directive("taskopt=info".parse()?)
        .add_directive("tower_http=info".parse()?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
