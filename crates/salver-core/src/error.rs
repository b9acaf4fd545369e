//! Validation errors for contact submissions.

use thiserror::Error;

/// Why a [`crate::ContactSubmission`] was rejected.
///
/// The display strings double as user-facing messages, so they stay
/// stable across releases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Please fill in all required fields")]
  MissingRequiredField,
  #[error("Please enter a valid email address")]
  InvalidEmail,
}
