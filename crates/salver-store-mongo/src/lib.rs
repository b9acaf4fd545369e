//! MongoDB backend for the salver contact store.
//!
//! Wraps the official [`mongodb`] driver. The driver manages its own
//! connection pool, so a [`MongoStore`] is cheap to clone and share.

mod document;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MongoStore;
