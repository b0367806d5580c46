//! mundo_em_dados library: country lookup from a Portuguese name
//!
//! A submission goes through four stages:
//! 1. the Portuguese name is trimmed, title-cased and translated to English,
//! 2. the flag URL (REST Countries) and the country record (api-ninjas) are
//!    fetched concurrently,
//! 3. the record is reduced to ten labelled, formatted fields,
//! 4. the result is rendered as an HTML page (or JSON).
//!
//! # Example
//!
//! ```no_run
//! use mundo_em_dados::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: std::env::var("API_KEY")?,
//!     port: 8080,
//!     ..Default::default()
//! };
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod country;
pub mod error_handling;
pub mod flag;
pub mod initialization;
pub mod pipeline;
pub mod projection;
pub mod server;
pub mod translate;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel};
pub use country::{CountryClient, CountryRecord, CountrySource};
pub use error_handling::{LookupError, LookupResult, Service};
pub use flag::{FlagClient, FlagSource};
pub use pipeline::{prepare_query, CountryData, CountryReport, LookupOutcome, LookupPipeline};
pub use projection::{
    format_number, format_value, project, KnownField, ProjectedField, ProjectedFields,
};
pub use translate::{MyMemoryTranslator, Translator};

use anyhow::{Context, Result};

use crate::initialization::init_pipeline;
use crate::server::{start_server, AppState, PageRenderer};

/// Validates the configuration, wires the lookup clients and serves the web UI.
///
/// Returns when the server shuts down (Ctrl-C).
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid (e.g. missing API key)
/// - The HTTP client or page template cannot be initialized
/// - The listen address cannot be bound
pub async fn run_server(config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;
    log::debug!("Starting with {:?}", config);

    let pipeline = init_pipeline(&config).context("Failed to initialize lookup clients")?;
    let page = PageRenderer::new().context("Failed to initialize page template")?;

    start_server(&config.bind, config.port, AppState::new(pipeline, page)).await
}
