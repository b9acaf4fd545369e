//! Mapping between the stored BSON document shape and the domain types.
//!
//! Documents live in the `contacts` collection with camelCase field names.
//! `_id` is an ObjectId, exposed to the rest of the system as its
//! 24-character hex form. Timestamps are BSON datetimes and therefore carry
//! millisecond precision.

use mongodb::bson::{DateTime, oid::ObjectId};
use salver_core::{Contact, NewContact};
use serde::{Deserialize, Serialize};

/// Name of the collection holding contact documents.
pub const COLLECTION: &str = "contacts";

/// The persisted form of a [`Contact`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
  #[serde(rename = "_id")]
  pub id:         ObjectId,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub subject:    String,
  pub message:    String,
  pub created_at: DateTime,
  pub updated_at: DateTime,
}

impl ContactDocument {
  /// Build a fresh document for `input`, assigning the id and setting both
  /// timestamps to the same instant.
  pub fn new(input: NewContact) -> Self {
    let now = DateTime::now();
    Self {
      id:         ObjectId::new(),
      name:       input.name,
      email:      input.email,
      phone:      input.phone,
      subject:    input.subject,
      message:    input.message,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn into_contact(self) -> Contact {
    Contact {
      id:         self.id.to_hex(),
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      subject:    self.subject,
      message:    self.message,
      created_at: self.created_at.to_chrono(),
      updated_at: self.updated_at.to_chrono(),
    }
  }
}
