//! carcat-web - car catalog browser
//!
//! Loads the catalog dataset once, then serves the home, search and compare
//! views together with the car images.

use std::path::PathBuf;

use anyhow::{Context, Result};
use carcat_common::config::{CliOverrides, ServerConfig, TomlConfig};
use carcat_common::Dataset;
use carcat_web::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for carcat-web
#[derive(Parser, Debug)]
#[command(name = "carcat-web")]
#[command(about = "Car catalog browser")]
#[command(version)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long, env = "CARCAT_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "CARCAT_PORT")]
    port: Option<u16>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(short, long, env = "CARCAT_BIND")]
    bind: Option<String>,

    /// Dataset JSON document [default: api/data.json]
    #[arg(short, long, env = "CARCAT_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Directory of car images served under /img [default: static/img]
    #[arg(short, long, env = "CARCAT_IMAGES_DIR")]
    images_dir: Option<PathBuf>,

    /// Log level when RUST_LOG is unset [default: info]
    #[arg(short, long, env = "CARCAT_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            port: self.port,
            bind_addr: self.bind.clone(),
            data_file: self.data_file.clone(),
            images_dir: self.images_dir.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = args
        .config
        .as_deref()
        .map(TomlConfig::load)
        .transpose()
        .context("Failed to load configuration file")?;
    let config = ServerConfig::resolve(args.overrides(), file_config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{},tower_http=info", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before any startup work
    info!(
        "Starting carcat-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    // Dataset must be in memory before the listener accepts anything
    let dataset = match Dataset::load(&config.data_file) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e).context("Failed to load dataset");
        }
    };

    if !config.images_dir.is_dir() {
        info!(
            "Images directory {} does not exist; image requests will return 404",
            config.images_dir.display()
        );
    }

    let state = AppState::new(dataset, config.images_dir.clone());
    let app = build_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Starting server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
