//! Error type for `salver-store-mongo`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] mongodb::error::Error),

  /// The id is not a valid ObjectId hex string, so no document can have it.
  #[error("malformed contact id: {0}")]
  MalformedId(#[from] mongodb::bson::oid::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
