//! Submission validation.
//!
//! Turns a [`ContactSubmission`] into a [`NewContact`] or explains why
//! it can't. Presence of the required fields is checked before email
//! shape, so a submission missing several things reports the missing
//! fields first.

use crate::{
  contact::{ContactSubmission, NewContact},
  error::ValidationError,
};

/// Trims `field` and rejects absent or blank values.
fn required(field: Option<&str>) -> Result<&str, ValidationError> {
  match field.map(str::trim) {
    Some(value) if !value.is_empty() => Ok(value),
    _ => Err(ValidationError::MissingRequiredField),
  }
}

/// Whether `address` looks like an email address.
///
/// Accepts exactly the addresses with a single `@` separating two
/// non-empty halves free of whitespace, where the domain half contains
/// an interior dot.
pub fn is_valid_email(address: &str) -> bool {
  let Some((local, domain)) = address.split_once('@') else {
    return false;
  };
  let clean =
    |part: &str| !part.is_empty() && part.chars().all(|c| !c.is_whitespace() && c != '@');
  clean(local)
    && clean(domain)
    && domain
      .match_indices('.')
      .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Validates a raw submission.
///
/// `name`, `email`, `subject`, and `message` must be present and
/// non-blank after trimming; `email` must pass [`is_valid_email`] and is
/// stored lowercased. `phone` is optional and defaults to the empty
/// string.
pub fn validate(submission: &ContactSubmission) -> Result<NewContact, ValidationError> {
  let name = required(submission.name.as_deref())?;
  let email = required(submission.email.as_deref())?;
  let subject = required(submission.subject.as_deref())?;
  let message = required(submission.message.as_deref())?;

  if !is_valid_email(email) {
    return Err(ValidationError::InvalidEmail);
  }

  Ok(NewContact {
    name:    name.to_owned(),
    email:   email.to_lowercase(),
    phone:   submission
      .phone
      .as_deref()
      .map(str::trim)
      .unwrap_or_default()
      .to_owned(),
    subject: subject.to_owned(),
    message: message.to_owned(),
  })
}
