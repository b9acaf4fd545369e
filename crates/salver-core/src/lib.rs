//! Core types and trait definitions for the salver contact form service.
//!
//! Everything here is plain data and validation logic; HTTP and MongoDB
//! only enter the picture in the crates built on top of this one.

pub mod contact;
pub mod error;
pub mod store;
pub mod validate;

pub use contact::{Contact, ContactSubmission, NewContact};
pub use error::ValidationError;
pub use validate::validate;
