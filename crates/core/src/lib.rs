//! # ShiftManager Core
//!
//! Domain models and error types shared across the ShiftManager backend.
//! This crate performs no I/O; the `db` and `mail` crates provide the
//! gateways to the external store and the email provider, and the `api`
//! crate composes them.

/// Error taxonomy for the backend
pub mod errors;
/// Domain models and request/response types
pub mod models;
