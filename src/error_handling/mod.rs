//! Error handling.
//!
//! This module provides the error types shared by the lookup clients and the
//! initialization code. Every outbound call reports through the same shape:
//! `Ok(Some(_))` found, `Ok(None)` not found, `Err(LookupError)` failed.

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, Service};

/// Result of a single outbound lookup.
pub type LookupResult<T> = Result<Option<T>, LookupError>;
