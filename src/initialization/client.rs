//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client shared by all lookup clients.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - A bounded per-request timeout, so a slow API cannot block a submission forever
///
/// `reqwest::Client` is reference counted internally; clones share the
/// connection pool.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
