//! Error type definitions.

use log::SetLoggerError;
use reqwest::{Error as ReqwestError, StatusCode};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured API base URL could not be parsed.
    #[error("Endpoint URL error: {0}")]
    EndpointError(#[from] url::ParseError),

    /// Error compiling the page template.
    #[error("Template initialization error: {0}")]
    TemplateError(#[from] Box<handlebars::TemplateError>),
}

/// Failure of an outbound lookup (translation, country data, flag).
///
/// "Nothing matched" is not an error: lookups return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("{service} request failed: {source}")]
    Transport {
        service: Service,
        #[source]
        source: ReqwestError,
    },

    /// The response status was not a success.
    #[error("{service} returned HTTP {status}")]
    Status { service: Service, status: StatusCode },

    /// The response body did not have the expected shape.
    #[error("{service} returned an unexpected body: {message}")]
    Decode { service: Service, message: String },

    /// The request URL could not be built from the configured base URL.
    #[error("{service} URL is invalid: {message}")]
    InvalidUrl { service: Service, message: String },
}

impl LookupError {
    /// The service the failed call was addressed to.
    pub fn service(&self) -> Service {
        match self {
            LookupError::Transport { service, .. }
            | LookupError::Status { service, .. }
            | LookupError::Decode { service, .. }
            | LookupError::InvalidUrl { service, .. } => *service,
        }
    }

    /// True when the failure happened below HTTP (no response received).
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport { .. })
    }

    /// Classifies a reqwest error the way the lookup clients report it.
    ///
    /// Body decoding failures are reported as [`LookupError::Decode`],
    /// everything else as [`LookupError::Transport`].
    pub(crate) fn from_reqwest(service: Service, e: ReqwestError) -> Self {
        if e.is_decode() {
            LookupError::Decode {
                service,
                message: e.to_string(),
            }
        } else {
            LookupError::Transport { service, source: e }
        }
    }
}

/// External services the application talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Translation,
    CountryData,
    Flag,
}

impl Service {
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Translation => "Translation service",
            Service::CountryData => "Country data API",
            Service::Flag => "Flag API",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_as_str_is_unique() {
        let all = [Service::Translation, Service::CountryData, Service::Flag];
        let names: std::collections::HashSet<_> = all.iter().map(|s| s.as_str()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_status_error_message() {
        let err = LookupError::Status {
            service: Service::CountryData,
            status: StatusCode::UNAUTHORIZED,
        };
        assert_eq!(err.to_string(), "Country data API returned HTTP 401 Unauthorized");
        assert_eq!(err.service(), Service::CountryData);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_message() {
        let err = LookupError::Decode {
            service: Service::Flag,
            message: "missing flags.png".to_string(),
        };
        assert!(err.to_string().contains("Flag API"));
        assert!(err.to_string().contains("missing flags.png"));
    }
}
