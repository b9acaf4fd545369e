//! Async HTTP client for the contact API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use salver_core::ContactSubmission;
use serde::Deserialize;

/// Connection settings for the contact API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// 2xx — the message was stored.
  Accepted,
  /// Non-2xx — `message` carries the server's explanation when the body
  /// had one.
  Rejected { message: Option<String> },
  /// The request produced no response at all.
  Unreachable,
}

/// Body shape shared by the API's error responses.
#[derive(Deserialize)]
struct ApiMessage {
  message: String,
}

/// Async HTTP client for the contact API.
///
/// Clones share the underlying [`reqwest::Client`] and its pool.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// `POST /api/contact` — one attempt, no retries.
  pub async fn submit_contact(&self, submission: &ContactSubmission) -> SubmitOutcome {
    let response = match self
      .client
      .post(self.url("/contact"))
      .json(submission)
      .send()
      .await
    {
      Ok(response) => response,
      Err(_) => return SubmitOutcome::Unreachable,
    };

    if response.status().is_success() {
      return SubmitOutcome::Accepted;
    }

    let message = response
      .json::<ApiMessage>()
      .await
      .ok()
      .map(|body| body.message);
    SubmitOutcome::Rejected { message }
  }
}
