//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - HTTP client (with timeout and User-Agent)
//! - Lookup clients wired into a [`LookupPipeline`]

mod client;
mod logger;

use crate::config::Config;
use crate::country::CountryClient;
use crate::error_handling::InitializationError;
use crate::flag::FlagClient;
use crate::pipeline::LookupPipeline;
use crate::translate::MyMemoryTranslator;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Pipeline backed by the real HTTP services.
pub type HttpPipeline = LookupPipeline<MyMemoryTranslator, CountryClient, FlagClient>;

/// Builds the lookup pipeline from the configuration.
///
/// All three clients share one `reqwest::Client`. The API key is handed to
/// the country client here and nowhere else.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or a base URL is invalid.
pub fn init_pipeline(config: &Config) -> Result<HttpPipeline, InitializationError> {
    let client = init_client(config)?;

    let translator = MyMemoryTranslator::new(client.clone(), &config.translate_api_url)?;
    let countries = CountryClient::new(
        client.clone(),
        &config.country_api_url,
        config.api_key.clone(),
    )?;
    let flags = FlagClient::new(client, &config.flag_api_url)?;

    Ok(LookupPipeline::new(translator, countries, flags))
}
