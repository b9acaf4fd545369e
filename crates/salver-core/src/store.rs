//! The storage abstraction for contacts.
//!
//! The trait is implemented by storage backends (e.g. `salver-store-mongo`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, NewContact};

/// A persistent store of [`Contact`]s.
///
/// Implementations assign identifiers and both timestamps at insert
/// time. [`list_contacts`](ContactStore::list_contacts) returns newest
/// first. [`get_contact`](ContactStore::get_contact) distinguishes "no
/// such contact" (`Ok(None)`) from store failure (`Err(_)`); an id the
/// store can't even parse is a failure, not an absence.
pub trait ContactStore: Send + Sync {
  /// The error type of the backing store.
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persists a validated submission, returning the stored record.
  fn insert_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Returns every stored contact, newest first.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Looks up a contact by its store-assigned id.
  fn get_contact<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;
}
