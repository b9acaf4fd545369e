//! HTTP API for the portfolio contact form.
//!
//! Exposes an axum [`Router`] backed by any
//! [`salver_core::store::ContactStore`], plus the `salver-server` binary
//! that serves it. Transport concerns (TLS, reverse proxying) are the
//! deployment's responsibility.

pub mod contacts;
pub mod error;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::{HeaderValue, Method, header},
  routing::{get, post},
};
use salver_core::store::ContactStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SALVER_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  /// MongoDB connection string. The only setting without a default.
  pub store_uri:       String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// Extra origin allowed by CORS, on top of the local-development ones.
  #[serde(default)]
  pub frontend_origin: Option<String>,
  /// Cosmetic deployment label, logged at startup.
  #[serde(default = "default_environment")]
  pub environment:     String,
}

fn default_port() -> u16 { 5000 }

fn default_environment() -> String { "development".to_string() }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContactStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the contact API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let cors = cors_layer(&state.config);

  Router::new()
    .route("/", get(health))
    .route("/api/contact", post(contacts::submit::<S>))
    .route("/api/contacts", get(contacts::list::<S>))
    .route("/api/contacts/{id}", get(contacts::get_one::<S>))
    .layer(TraceLayer::new_for_http())
    .layer(cors)
    .with_state(state)
}

/// `GET /` — liveness probe.
async fn health() -> Json<Value> {
  Json(json!({ "message": "Portfolio API is running" }))
}

// ─── CORS ─────────────────────────────────────────────────────────────────────

/// Origins always allowed, covering local frontend development servers.
const LOCAL_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5500"];

fn cors_layer(config: &ServerConfig) -> CorsLayer {
  let mut origins: Vec<HeaderValue> = LOCAL_ORIGINS
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

  if let Some(origin) = &config.frontend_origin {
    match HeaderValue::from_str(origin) {
      Ok(value) => origins.push(value),
      Err(_) => tracing::warn!(%origin, "ignoring unparseable frontend origin"),
    }
  }

  CorsLayer::new()
    .allow_origin(origins)
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE])
    .allow_credentials(true)
}

#[cfg(test)]
mod tests;
