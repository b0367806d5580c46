//! Country name translation.
//!
//! Translates the user's Portuguese input into the English name expected by
//! the country and flag APIs, using the MyMemory translation API.

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::config::{SOURCE_LANGUAGE, TARGET_LANGUAGE};
use crate::error_handling::{LookupError, LookupResult, Service};

/// Something that turns a source-language phrase into a target-language one.
pub trait Translator: Send + Sync {
    /// Translates `text`. `Ok(None)` means the service had no translation.
    fn translate(&self, text: &str) -> impl Future<Output = LookupResult<String>> + Send;
}

/// MyMemory response envelope.
///
/// `responseStatus` is a number on success but a string (e.g. `"403"`) on
/// quota or language-pair errors.
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
    #[serde(rename = "responseStatus")]
    response_status: Option<serde_json::Value>,
    #[serde(rename = "responseDetails", default)]
    response_details: Option<serde_json::Value>,
    #[serde(default)]
    matches: Vec<MyMemoryMatch>,
}

impl MyMemoryResponse {
    /// `translatedText`, or the first translation memory match when that is blank.
    fn into_translation(self) -> Option<String> {
        let clean = |t: String| Some(t.trim().to_string()).filter(|t| !t.is_empty());
        self.response_data
            .and_then(|d| d.translated_text)
            .and_then(clean)
            .or_else(|| {
                self.matches
                    .into_iter()
                    .next()
                    .and_then(|m| m.translation)
                    .and_then(clean)
            })
    }
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryMatch {
    translation: Option<String>,
}

fn status_code(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Translator backed by the MyMemory HTTP API.
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    endpoint: Url,
    langpair: String,
}

impl MyMemoryTranslator {
    /// Creates a Portuguese → English translator.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not a valid URL.
    pub fn new(client: reqwest::Client, endpoint: &str) -> Result<Self, url::ParseError> {
        Self::with_languages(client, endpoint, SOURCE_LANGUAGE, TARGET_LANGUAGE)
    }

    /// Creates a translator for an arbitrary language pair.
    pub fn with_languages(
        client: reqwest::Client,
        endpoint: &str,
        source: &str,
        target: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            langpair: format!("{}|{}", source, target),
        })
    }
}

impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str) -> LookupResult<String> {
        let service = Service::Translation;
        log::debug!("Translating '{}' ({})", text, self.langpair);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", text), ("langpair", self.langpair.as_str())])
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupError::Status { service, status });
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| LookupError::from_reqwest(service, e))?;

        if let Some(code) = body.response_status.as_ref().and_then(status_code) {
            if code != 200 {
                return Err(LookupError::Decode {
                    service,
                    message: format!(
                        "responseStatus {} ({})",
                        code,
                        body.response_details
                            .as_ref()
                            .map(|d| d.to_string())
                            .unwrap_or_default()
                    ),
                });
            }
        }

        Ok(body.into_translation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_code_number_and_string() {
        assert_eq!(status_code(&json!(200)), Some(200));
        assert_eq!(status_code(&json!("403")), Some(403));
        assert_eq!(status_code(&json!(null)), None);
    }

    #[test]
    fn test_response_envelope_parses() {
        let body: MyMemoryResponse = serde_json::from_value(json!({
            "responseData": {"translatedText": " Brazil ", "match": 1},
            "responseStatus": 200,
            "matches": []
        }))
        .unwrap();
        assert_eq!(
            body.response_data.and_then(|d| d.translated_text).as_deref(),
            Some(" Brazil ")
        );
    }

    #[test]
    fn test_blank_text_falls_back_to_first_match() {
        let body: MyMemoryResponse = serde_json::from_value(json!({
            "responseData": {"translatedText": "  ", "match": 0.85},
            "responseStatus": 200,
            "matches": [
                {"segment": "Alemanha", "translation": " Germany ", "match": 0.85},
                {"segment": "Alemanha", "translation": "Deutschland", "match": 0.5}
            ]
        }))
        .unwrap();
        assert_eq!(body.into_translation().as_deref(), Some("Germany"));
    }

    #[test]
    fn test_blank_text_and_no_matches_is_none() {
        let body: MyMemoryResponse = serde_json::from_value(json!({
            "responseData": {"translatedText": ""},
            "responseStatus": 200
        }))
        .unwrap();
        assert_eq!(body.into_translation(), None);
    }

    #[test]
    fn test_langpair() {
        let t = MyMemoryTranslator::new(reqwest::Client::new(), "http://localhost/get").unwrap();
        assert_eq!(t.langpair, "pt|en");
        assert!(MyMemoryTranslator::new(reqwest::Client::new(), "nope").is_err());
    }
}
