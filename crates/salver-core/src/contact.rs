//! The [`Contact`] record and its unvalidated wire-side counterpart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form message.
///
/// Field names serialize in camelCase to match the wire contract spoken
/// by clients of the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  /// Store-assigned identifier, opaque to everything but the store.
  pub id:         String,
  pub name:       String,
  pub email:      String,
  /// Empty string when the submitter left the field blank.
  pub phone:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A raw submission as received from a client, before validation.
///
/// Every field is optional at this layer; [`crate::validate::validate`]
/// decides which absences are errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

/// A validated submission, ready for the store.
///
/// `name`, `email`, `subject`, and `message` are non-blank and trimmed.
/// `email` is lowercased. `phone` may be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewContact {
  pub name:    String,
  pub email:   String,
  pub phone:   String,
  pub subject: String,
  pub message: String,
}
