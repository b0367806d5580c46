//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_BIND, DEFAULT_COUNTRY_API_URL, DEFAULT_FLAG_API_URL, DEFAULT_PORT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TRANSLATE_API_URL, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line and the environment by `clap`; can also be
/// built programmatically (tests point the base URLs at mock servers).
///
/// # Examples
///
/// ```bash
/// # API key from the environment (or a .env file)
/// API_KEY=... mundo_em_dados
///
/// # Custom port and debug logging
/// mundo_em_dados --port 8080 --log-level debug
/// ```
#[derive(Clone, Parser)]
#[command(
    name = "mundo_em_dados",
    about = "Serves a page that looks up country statistics and flags from a Portuguese country name."
)]
pub struct Config {
    /// Address to bind the web UI to
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Port of the web UI
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-request timeout in seconds for outbound API calls
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Secret key for the country statistics API
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Country statistics endpoint
    #[arg(long, default_value = DEFAULT_COUNTRY_API_URL)]
    pub country_api_url: String,

    /// Flag reference endpoint (country name is appended as a path segment)
    #[arg(long, default_value = DEFAULT_FLAG_API_URL)]
    pub flag_api_url: String,

    /// Translation endpoint
    #[arg(long, default_value = DEFAULT_TRANSLATE_API_URL)]
    pub translate_api_url: String,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

// The API key must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind", &self.bind)
            .field("port", &self.port)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("api_key", &"<redacted>")
            .field("country_api_url", &self.country_api_url)
            .field("flag_api_url", &self.flag_api_url)
            .field("translate_api_url", &self.translate_api_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            api_key: String::new(),
            country_api_url: DEFAULT_COUNTRY_API_URL.to_string(),
            flag_api_url: DEFAULT_FLAG_API_URL.to_string(),
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending option
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Config {
    /// Checks the configuration before any resource is created.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field: an empty API key, a zero timeout or a
    /// base URL that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigValidationError::new(
                "api_key",
                "must not be empty; set API_KEY in the environment or a .env file",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0",
            ));
        }
        for (field, value) in [
            ("country_api_url", &self.country_api_url),
            ("flag_api_url", &self.flag_api_url),
            ("translate_api_url", &self.translate_api_url),
        ] {
            match Url::parse(value) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => {
                    return Err(ConfigValidationError::new(
                        field,
                        format!("unsupported scheme '{}', expected http or https", url.scheme()),
                    ))
                }
                Err(e) => {
                    return Err(ConfigValidationError::new(
                        field,
                        format!("'{}' is not a valid URL: {}", value, e),
                    ))
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            api_key: "secret".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(log::LevelFilter::from(LogLevel::Warn), log::LevelFilter::Warn);
        assert_eq!(log::LevelFilter::from(LogLevel::Info), log::LevelFilter::Info);
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 8501);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.bind, "127.0.0.1");
        assert!(config.api_key.is_empty());
        assert_eq!(config.country_api_url, DEFAULT_COUNTRY_API_URL);
    }

    #[test]
    fn test_validate_accepts_defaults_with_key() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let mut config = valid_config();
        config.api_key = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "api_key");
        assert!(err.message.contains("API_KEY"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = valid_config();
        config.timeout_seconds = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "timeout_seconds");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = valid_config();
        config.flag_api_url = "not a url".to_string();
        assert_eq!(config.validate().unwrap_err().field, "flag_api_url");

        let mut config = valid_config();
        config.translate_api_url = "ftp://example.com/get".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "translate_api_url");
        assert!(err.message.contains("ftp"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_from_args() {
        let config = Config::try_parse_from([
            "mundo_em_dados",
            "--api-key",
            "abc",
            "--port",
            "9000",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.port, 9000);
        assert!(matches!(config.log_format, LogFormat::Json));
        assert_eq!(config.flag_api_url, DEFAULT_FLAG_API_URL);
    }
}
