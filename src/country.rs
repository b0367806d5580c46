//! Country statistics lookup (api-ninjas).

use std::future::Future;

use reqwest::StatusCode;
use url::Url;

use crate::config::API_KEY_HEADER;
use crate::error_handling::{LookupError, LookupResult, Service};

/// Raw country record as returned by the statistics API.
///
/// No field is guaranteed to be present.
pub type CountryRecord = serde_json::Map<String, serde_json::Value>;

/// Source of country statistics records.
pub trait CountrySource: Send + Sync {
    /// Fetches the best match for `english_name`.
    fn fetch_country(
        &self,
        english_name: &str,
    ) -> impl Future<Output = LookupResult<CountryRecord>> + Send;
}

/// api-ninjas `/v1/country` client.
#[derive(Clone)]
pub struct CountryClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl std::fmt::Debug for CountryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl CountryClient {
    /// Creates a client authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(
        client: reqwest::Client,
        endpoint: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }
}

impl CountrySource for CountryClient {
    /// Returns the first record of the response array.
    ///
    /// Any status other than 200 and an empty array both mean "not found".
    /// Transport failures and bodies that are not an array of objects are
    /// errors.
    async fn fetch_country(&self, english_name: &str) -> LookupResult<CountryRecord> {
        let service = Service::CountryData;

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("name", english_name)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
                log::warn!("{} rejected the API key (HTTP {})", service, status);
            } else {
                log::debug!("{} returned HTTP {} for '{}'", service, status, english_name);
            }
            return Ok(None);
        }

        let records: Vec<CountryRecord> = response
            .json()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        log::debug!(
            "{} returned {} record(s) for '{}'",
            service,
            records.len(),
            english_name
        );
        Ok(records.into_iter().next())
    }
}
