//! salver-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), layers
//! `SALVER_*` environment variables on top, connects to MongoDB, and serves
//! the contact API over HTTP until SIGINT or SIGTERM.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use salver_api::{AppState, ServerConfig};
use salver_store_mongo::MongoStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Portfolio contact API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("SALVER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Connect to MongoDB. A bad URI or unreachable server fails here, before
  // the listener is bound.
  let store = MongoStore::connect(&server_cfg.store_uri)
    .await
    .context("failed to connect to MongoDB")?;
  tracing::info!(database = %store.database_name(), "connected to MongoDB");

  // Assemble shared handler state.
  let state = AppState {
    store:  Arc::new(store.clone()),
    config: Arc::new(server_cfg.clone()),
  };

  let app = salver_api::router(state);
  let address = format!("0.0.0.0:{}", server_cfg.port);

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  tracing::info!(
    environment = %server_cfg.environment,
    "listening on http://{address}"
  );

  // On signal the serve future is dropped; in-flight requests are not
  // drained.
  tokio::select! {
    result = axum::serve(listener, app).into_future() => {
      result.context("server error")?;
    }
    () = shutdown_signal() => {}
  }

  store.close().await;
  tracing::info!("store connection closed, exiting");

  Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(error) = tokio::signal::ctrl_c().await {
      tracing::error!(%error, "failed to install Ctrl+C handler");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    use tokio::signal::unix::{SignalKind, signal};
    match signal(SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(error) => {
        tracing::error!(%error, "failed to install SIGTERM handler");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
    () = terminate => tracing::info!("received SIGTERM, shutting down"),
  }
}
