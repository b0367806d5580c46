//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, page texts, messages)
//! - CLI option types, parsing and validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};
