//! Shared model for the wine catalog client.
//!
//! Everything here is plain Rust with no browser bindings: the wire types
//! exchanged with the classification service, the raw form model the UI
//! edits, validation of that form into a request payload, and the error
//! taxonomy surfaced to users.

pub mod errors;
pub mod model;
pub mod requests;
pub mod responses;
pub mod validation;
