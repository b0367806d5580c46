//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! external endpoints, timeouts, page texts and user-facing messages.

// External endpoints
/// Country statistics API (api-ninjas). Requires the `X-Api-Key` header.
pub const DEFAULT_COUNTRY_API_URL: &str = "https://api.api-ninjas.com/v1/country";
/// Flag reference API (REST Countries). The country name is appended as a path segment.
pub const DEFAULT_FLAG_API_URL: &str = "https://restcountries.com/v3.1/name";
/// MyMemory translation API.
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://api.mymemory.translated.net/get";

/// Header carrying the country API secret.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Source language of user input.
pub const SOURCE_LANGUAGE: &str = "pt";
/// Language used to query the country and flag APIs.
pub const TARGET_LANGUAGE: &str = "en";

// Network
/// Default per-request timeout in seconds for outbound calls.
/// Outbound calls must never block a submission indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default address the web UI binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default port of the web UI (same as a local Streamlit app).
pub const DEFAULT_PORT: u16 = 8501;

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("mundo_em_dados/", env!("CARGO_PKG_VERSION"));

// Page
pub const PAGE_TITLE: &str = "Mundo em Dados";
pub const PAGE_ICON: &str = "🌍";
pub const PAGE_INTRO: &str =
    "Esse site é programado para te ajudar a descobrir um pouco mais sobre diversos países!";
pub const INPUT_LABEL: &str = "Digite o nome do país:";
/// Width of the flag image in pixels.
pub const FLAG_IMAGE_WIDTH: u32 = 200;

// Table headers
pub const TABLE_LABEL_HEADER: &str = "Dados";
pub const TABLE_VALUE_HEADER: &str = "Valores";

// User-facing messages
pub const MSG_TRANSLATION_FAILED: &str =
    "Não foi possível traduzir o nome do país ou Verifique a ortografia. Tente Novamente.";
pub const MSG_FLAG_UNAVAILABLE: &str = "Não foi possível carregar a bandeira.";
pub const MSG_COUNTRY_NOT_FOUND: &str =
    "País não encontrado na base de dados. Tente outro nome ou verifique a ortografia.";
pub const MSG_COUNTRY_UNAVAILABLE: &str =
    "Não foi possível consultar a base de dados. Tente novamente mais tarde.";

/// Placeholder for a value that is missing or null.
pub const MISSING_VALUE: &str = "N/A";
