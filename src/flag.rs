//! Flag image lookup (REST Countries).

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::error_handling::{LookupError, LookupResult, Service};

/// Source of flag image URLs.
pub trait FlagSource: Send + Sync {
    /// Returns the raster flag URL of the best match for `english_name`.
    fn fetch_flag(&self, english_name: &str) -> impl Future<Output = LookupResult<String>> + Send;
}

#[derive(Debug, Deserialize)]
struct RestCountry {
    flags: Option<Flags>,
}

#[derive(Debug, Deserialize)]
struct Flags {
    png: Option<String>,
}

/// REST Countries `/v3.1/name/{name}` client.
#[derive(Debug, Clone)]
pub struct FlagClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl FlagClient {
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Appends `english_name` as a single, percent-encoded path segment.
    fn url_for(&self, english_name: &str) -> Result<Url, LookupError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl {
                service: Service::Flag,
                message: format!("'{}' cannot be a base URL", self.endpoint),
            })?
            .pop_if_empty()
            .push(english_name);
        Ok(url)
    }
}

impl FlagSource for FlagClient {
    async fn fetch_flag(&self, english_name: &str) -> LookupResult<String> {
        let service = Service::Flag;
        let url = self.url_for(english_name)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            log::debug!("{} returned HTTP {} for '{}'", service, status, english_name);
            return Ok(None);
        }

        let countries: Vec<RestCountry> = response
            .json()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        Ok(countries
            .into_iter()
            .next()
            .and_then(|c| c.flags)
            .and_then(|f| f.png))
    }
}
