//! Router tests against in-memory store doubles.

use std::sync::{Arc, Mutex};

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use chrono::{Duration, Utc};
use salver_core::{Contact, NewContact, store::ContactStore};
use serde_json::{Value, json};
use thiserror::Error;
use tower::ServiceExt as _;
use uuid::Uuid;

use crate::{AppState, ServerConfig, router};

// ─── Store doubles ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
#[error("{0}")]
struct MemError(String);

/// In-memory store. Keeps insert order; listing reverses it, and each insert
/// gets a strictly later timestamp so ordering is observable.
#[derive(Clone, Default)]
struct MemStore {
  contacts: Arc<Mutex<Vec<Contact>>>,
}

impl MemStore {
  fn len(&self) -> usize { self.contacts.lock().unwrap().len() }

  fn stored(&self, index: usize) -> Contact {
    self.contacts.lock().unwrap()[index].clone()
  }
}

impl ContactStore for MemStore {
  type Error = MemError;

  async fn insert_contact(&self, input: NewContact) -> Result<Contact, MemError> {
    let mut contacts = self.contacts.lock().unwrap();
    let now = Utc::now() + Duration::milliseconds(contacts.len() as i64);
    let contact = Contact {
      id:         Uuid::new_v4().simple().to_string(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      subject:    input.subject,
      message:    input.message,
      created_at: now,
      updated_at: now,
    };
    contacts.push(contact.clone());
    Ok(contact)
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>, MemError> {
    let contacts = self.contacts.lock().unwrap();
    Ok(contacts.iter().rev().cloned().collect())
  }

  async fn get_contact(&self, id: &str) -> Result<Option<Contact>, MemError> {
    // Mirrors the MongoDB backend: an unparseable id is an error, not None.
    Uuid::parse_str(id).map_err(|e| MemError(e.to_string()))?;
    let contacts = self.contacts.lock().unwrap();
    Ok(contacts.iter().find(|c| c.id == id).cloned())
  }
}

/// Store whose every operation fails.
#[derive(Clone)]
struct FailStore;

impl ContactStore for FailStore {
  type Error = MemError;

  async fn insert_contact(&self, _input: NewContact) -> Result<Contact, MemError> {
    Err(MemError("collection unavailable".to_string()))
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>, MemError> {
    Err(MemError("collection unavailable".to_string()))
  }

  async fn get_contact(&self, _id: &str) -> Result<Option<Contact>, MemError> {
    Err(MemError("collection unavailable".to_string()))
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn test_config() -> ServerConfig {
  ServerConfig {
    store_uri:       "mongodb://localhost:27017/test".to_string(),
    port:            5000,
    frontend_origin: Some("https://portfolio.example".to_string()),
    environment:     "test".to_string(),
  }
}

fn make_state<S: ContactStore>(store: S) -> AppState<S> {
  AppState {
    store:  Arc::new(store),
    config: Arc::new(test_config()),
  }
}

async fn send<S>(
  state: AppState<S>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> axum::response::Response
where
  S: ContactStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(value) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(value.to_string())
    }
    None => Body::empty(),
  };
  let request = builder.body(body).unwrap();
  router(state).oneshot(request).await.unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn submission() -> Value {
  json!({
    "name":    "Ada Lovelace",
    "email":   "ada@example.com",
    "phone":   "555-0100",
    "subject": "Analytical engines",
    "message": "I have some notes on your latest program.",
  })
}

// ─── Configuration ───────────────────────────────────────────────────────────

#[test]
fn config_defaults_apply() {
  let config: ServerConfig =
    serde_json::from_value(json!({ "store_uri": "mongodb://localhost:27017" }))
      .unwrap();
  assert_eq!(config.port, 5000);
  assert_eq!(config.environment, "development");
  assert_eq!(config.frontend_origin, None);
}

// ─── Health ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_running() {
  let response = send(make_state(MemStore::default()), "GET", "/", None).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(json_body(response).await["message"], "Portfolio API is running");
}

// ─── Submit ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_returns_201_with_confirmation() {
  let store = MemStore::default();
  let response = send(
    make_state(store.clone()),
    "POST",
    "/api/contact",
    Some(submission()),
  )
  .await;
  assert_eq!(response.status(), StatusCode::CREATED);

  let body = json_body(response).await;
  assert_eq!(body["message"], "Contact form submitted successfully!");
  assert_eq!(body["data"]["name"], "Ada Lovelace");
  assert_eq!(body["data"]["email"], "ada@example.com");
  assert!(body["data"]["id"].is_string());
  // Only id, name, and email come back.
  assert_eq!(body["data"].as_object().unwrap().len(), 3);
  assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn submit_missing_required_field_returns_400_and_writes_nothing() {
  let store = MemStore::default();
  let mut body = submission();
  body.as_object_mut().unwrap().remove("message");

  let response =
    send(make_state(store.clone()), "POST", "/api/contact", Some(body)).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    json_body(response).await["message"],
    "Please fill in all required fields"
  );
  assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn submit_invalid_email_returns_400_and_writes_nothing() {
  let store = MemStore::default();
  let mut body = submission();
  body["email"] = json!("not-an-email");

  let response =
    send(make_state(store.clone()), "POST", "/api/contact", Some(body)).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    json_body(response).await["message"],
    "Please enter a valid email address"
  );
  assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn submit_without_phone_stores_empty_string() {
  let store = MemStore::default();
  let mut body = submission();
  body.as_object_mut().unwrap().remove("phone");

  let response =
    send(make_state(store.clone()), "POST", "/api/contact", Some(body)).await;
  assert_eq!(response.status(), StatusCode::CREATED);
  assert_eq!(store.stored(0).phone, "");
}

#[tokio::test]
async fn submit_normalises_fields() {
  let store = MemStore::default();
  let mut body = submission();
  body["name"] = json!("  Ada Lovelace  ");
  body["email"] = json!("Ada@Example.COM");

  let response =
    send(make_state(store.clone()), "POST", "/api/contact", Some(body)).await;
  assert_eq!(response.status(), StatusCode::CREATED);

  let stored = store.stored(0);
  assert_eq!(stored.name, "Ada Lovelace");
  assert_eq!(stored.email, "ada@example.com");
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store_returns_empty_array() {
  let response = send(make_state(MemStore::default()), "GET", "/api/contacts", None).await;
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(json_body(response).await["contacts"], json!([]));
}

#[tokio::test]
async fn list_returns_newest_first_with_wire_field_names() {
  let state = make_state(MemStore::default());
  for subject in ["first", "second", "third"] {
    let mut body = submission();
    body["subject"] = json!(subject);
    send(state.clone(), "POST", "/api/contact", Some(body)).await;
  }

  let response = send(state, "GET", "/api/contacts", None).await;
  assert_eq!(response.status(), StatusCode::OK);

  let body = json_body(response).await;
  let contacts = body["contacts"].as_array().unwrap();
  let subjects: Vec<&str> = contacts
    .iter()
    .map(|c| c["subject"].as_str().unwrap())
    .collect();
  assert_eq!(subjects, ["third", "second", "first"]);

  let first = contacts[0].as_object().unwrap();
  assert!(first.contains_key("createdAt"), "keys: {:?}", first.keys());
  assert!(first.contains_key("updatedAt"));
  assert!(!first.contains_key("created_at"));
}

// ─── Get one ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_one_returns_the_contact() {
  let state = make_state(MemStore::default());
  let response = send(state.clone(), "POST", "/api/contact", Some(submission())).await;
  let id = json_body(response).await["data"]["id"]
    .as_str()
    .unwrap()
    .to_string();

  let response = send(state, "GET", &format!("/api/contacts/{id}"), None).await;
  assert_eq!(response.status(), StatusCode::OK);

  let body = json_body(response).await;
  assert_eq!(body["contact"]["id"], id.as_str());
  assert_eq!(body["contact"]["subject"], "Analytical engines");
}

#[tokio::test]
async fn get_one_unknown_id_returns_404() {
  let state = make_state(MemStore::default());
  let absent = Uuid::new_v4().simple().to_string();

  let response = send(state, "GET", &format!("/api/contacts/{absent}"), None).await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(response).await["message"], "Contact not found");
}

#[tokio::test]
async fn get_one_malformed_id_returns_500() {
  let state = make_state(MemStore::default());

  let response = send(state, "GET", "/api/contacts/not-a-valid-id", None).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(
    json_body(response).await["message"],
    "Server error. Please try again later."
  );
}

// ─── Storage failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_storage_failure_returns_500_with_generic_message() {
  let response = send(
    make_state(FailStore),
    "POST",
    "/api/contact",
    Some(submission()),
  )
  .await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body = json_body(response).await;
  assert_eq!(body["message"], "Server error. Please try again later.");
  // The backend detail never reaches the caller.
  assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn list_storage_failure_returns_500() {
  let response = send(make_state(FailStore), "GET", "/api/contacts", None).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(
    json_body(response).await["message"],
    "Server error. Please try again later."
  );
}

// ─── CORS ────────────────────────────────────────────────────────────────────

async fn preflight(state: AppState<MemStore>, origin: &str) -> axum::response::Response {
  let request = Request::builder()
    .method("OPTIONS")
    .uri("/api/contact")
    .header(header::ORIGIN, origin)
    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
    .body(Body::empty())
    .unwrap();
  router(state).oneshot(request).await.unwrap()
}

#[tokio::test]
async fn cors_allows_local_development_origin() {
  let response = preflight(make_state(MemStore::default()), "http://localhost:3000").await;

  let allowed = response
    .headers()
    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    .unwrap();
  assert_eq!(allowed, "http://localhost:3000");
  assert_eq!(
    response
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
      .unwrap(),
    "true"
  );
}

#[tokio::test]
async fn cors_allows_configured_frontend_origin() {
  let response =
    preflight(make_state(MemStore::default()), "https://portfolio.example").await;

  let allowed = response
    .headers()
    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    .unwrap();
  assert_eq!(allowed, "https://portfolio.example");
}

#[tokio::test]
async fn cors_withholds_unknown_origin() {
  let response = preflight(make_state(MemStore::default()), "https://evil.example").await;
  assert!(
    response
      .headers()
      .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
      .is_none()
  );
}
