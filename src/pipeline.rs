//! Per-submission lookup pipeline.
//!
//! One submission goes through: prepare query → translate → (flag ∥ country
//! data) → project. Nothing is shared between submissions except the clients.

use serde::Serialize;

use crate::config::{
    MSG_COUNTRY_NOT_FOUND, MSG_COUNTRY_UNAVAILABLE, MSG_FLAG_UNAVAILABLE, MSG_TRANSLATION_FAILED,
};
use crate::country::CountrySource;
use crate::flag::FlagSource;
use crate::projection::{project, ProjectedFields};
use crate::translate::Translator;

/// Trims the input and title-cases it.
///
/// The first cased letter of every run of letters is upper-cased and the rest
/// lower-cased, so `"  estados UNIDOS "` becomes `"Estados Unidos"` and
/// `"guiné-bissau"` becomes `"Guiné-Bissau"`.
pub fn prepare_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_is_letter = false;
    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}

/// Outcome of the country data stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CountryData {
    /// A record was found and projected.
    Found { fields: ProjectedFields },
    /// The API had no match or answered with a non-success status.
    NotFound,
    /// The API could not be reached or answered with garbage.
    Unavailable,
}

/// Everything produced for a submission that got past translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryReport {
    /// The prepared (trimmed, title-cased) user input.
    pub query: String,
    pub english_name: String,
    pub flag_url: Option<String>,
    pub data: CountryData,
}

impl CountryReport {
    /// Notice shown in place of the flag image, if any.
    pub fn flag_notice(&self) -> Option<&'static str> {
        self.flag_url.is_none().then_some(MSG_FLAG_UNAVAILABLE)
    }

    /// Warning shown in place of the table, if any.
    pub fn data_warning(&self) -> Option<&'static str> {
        match self.data {
            CountryData::Found { .. } => None,
            CountryData::NotFound => Some(MSG_COUNTRY_NOT_FOUND),
            CountryData::Unavailable => Some(MSG_COUNTRY_UNAVAILABLE),
        }
    }

    /// Projected rows, when a record was found.
    pub fn fields(&self) -> Option<&ProjectedFields> {
        match &self.data {
            CountryData::Found { fields } => Some(fields),
            _ => None,
        }
    }
}

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// No input: only the prompt is shown.
    Empty,
    /// The name could not be translated; nothing else was queried.
    TranslationFailed { query: String },
    /// Flag and data lookups ran.
    Fetched(CountryReport),
}

impl LookupOutcome {
    /// Warning that halts the submission, if any.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            LookupOutcome::Empty => None,
            LookupOutcome::TranslationFailed { .. } => Some(MSG_TRANSLATION_FAILED),
            LookupOutcome::Fetched(report) => report.data_warning(),
        }
    }
}

/// Runs submissions against a translator, a country source and a flag source.
#[derive(Debug, Clone)]
pub struct LookupPipeline<T, C, F> {
    translator: T,
    countries: C,
    flags: F,
}

impl<T, C, F> LookupPipeline<T, C, F>
where
    T: Translator,
    C: CountrySource,
    F: FlagSource,
{
    pub fn new(translator: T, countries: C, flags: F) -> Self {
        Self {
            translator,
            countries,
            flags,
        }
    }

    /// Runs one submission to completion. Never fails: every error becomes
    /// part of the outcome.
    pub async fn run(&self, raw: &str) -> LookupOutcome {
        let query = prepare_query(raw);
        if query.is_empty() {
            return LookupOutcome::Empty;
        }

        let english_name = match self.translate(&query).await {
            Some(name) => name,
            None => return LookupOutcome::TranslationFailed { query },
        };
        log::info!("Looking up '{}' as '{}'", query, english_name);

        // Independent lookups; their failures are reported separately.
        let (flag_url, data) = tokio::join!(
            self.fetch_flag(&english_name),
            self.fetch_country(&english_name)
        );

        LookupOutcome::Fetched(CountryReport {
            query,
            english_name,
            flag_url,
            data,
        })
    }

    async fn translate(&self, query: &str) -> Option<String> {
        match self.translator.translate(query).await {
            Ok(Some(name)) => Some(name),
            Ok(None) => {
                log::warn!("No translation for '{}'", query);
                None
            }
            Err(e) => {
                log::warn!("Translation of '{}' failed ({}): {}", query, e.service(), e);
                None
            }
        }
    }

    async fn fetch_flag(&self, english_name: &str) -> Option<String> {
        match self.flags.fetch_flag(english_name).await {
            Ok(url) => {
                if url.is_none() {
                    log::info!("No flag found for '{}'", english_name);
                }
                url
            }
            Err(e) => {
                log::warn!(
                    "Flag lookup for '{}' failed ({}): {}",
                    english_name,
                    e.service(),
                    e
                );
                None
            }
        }
    }

    async fn fetch_country(&self, english_name: &str) -> CountryData {
        match self.countries.fetch_country(english_name).await {
            Ok(Some(record)) => CountryData::Found {
                fields: project(&record),
            },
            Ok(None) => {
                log::info!("No country record for '{}'", english_name);
                CountryData::NotFound
            }
            Err(e) => {
                log::error!(
                    "Country lookup for '{}' failed ({}): {}",
                    english_name,
                    e.service(),
                    e
                );
                CountryData::Unavailable
            }
        }
    }
}
