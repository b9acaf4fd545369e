//! Handlers for the contact endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/contact` | 400 on validation failure |
//! | `GET`  | `/api/contacts` | Newest first |
//! | `GET`  | `/api/contacts/:id` | 404 if not found |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use salver_core::{ContactSubmission, store::ContactStore, validate};
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /api/contact` — body: a contact submission.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  Json(submission): Json<ContactSubmission>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  tracing::info!(?submission, "received contact form");

  let input = validate(&submission).inspect_err(|error| {
    tracing::warn!(%error, "rejected contact submission");
  })?;

  let contact = state
    .store
    .insert_contact(input)
    .await
    .map_err(|e| ApiError::Storage(Box::new(e)))?;

  tracing::info!(id = %contact.id, "contact saved");

  // The confirmation carries only the id, name, and email.
  Ok((
    StatusCode::CREATED,
    Json(json!({
      "message": "Contact form submitted successfully!",
      "data": {
        "id":    contact.id,
        "name":  contact.name,
        "email": contact.email,
      },
    })),
  ))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/contacts` — every stored contact, newest first.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contacts = state
    .store
    .list_contacts()
    .await
    .map_err(|e| ApiError::Storage(Box::new(e)))?;
  Ok(Json(json!({ "contacts": contacts })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/contacts/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let contact = state
    .store
    .get_contact(&id)
    .await
    .map_err(|e| ApiError::Storage(Box::new(e)))?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(json!({ "contact": contact })))
}
