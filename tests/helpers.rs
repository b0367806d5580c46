// Shared test helpers for mocking the external APIs.
//
// All three services are mounted on one wiremock server under their real paths.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mundo_em_dados::Config;

pub const TEST_API_KEY: &str = "test-key";

/// Config pointing every endpoint at `server`.
pub fn test_config(server: &MockServer) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        timeout_seconds: 2,
        country_api_url: format!("{}/v1/country", server.uri()),
        flag_api_url: format!("{}/v3.1/name", server.uri()),
        translate_api_url: format!("{}/get", server.uri()),
        ..Default::default()
    }
}

/// MyMemory answering `from` with `to`.
pub async fn mount_translation(server: &MockServer, from: &str, to: &str) {
    Mock::given(method("GET"))
        .and(path("/get"))
        .and(query_param("q", from))
        .and(query_param("langpair", "pt|en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": {"translatedText": to, "match": 1},
            "responseStatus": 200,
            "responseDetails": "",
            "matches": []
        })))
        .mount(server)
        .await;
}

/// MyMemory failing every request with `status`.
#[allow(dead_code)] // Not every test file needs it
pub async fn mount_translation_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// api-ninjas answering `name` with `records`, only when the key is sent.
pub async fn mount_country(server: &MockServer, name: &str, records: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/country"))
        .and(query_param("name", name))
        .and(header("X-Api-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

/// REST Countries answering `name` with a single country whose flag is `png`.
pub async fn mount_flag(server: &MockServer, name: &str, png: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v3.1/name/{}", name.replace(' ', "%20"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": {"common": name},
            "flags": {"png": png, "svg": png.replace(".png", ".svg")}
        }])))
        .mount(server)
        .await;
}

/// REST Countries answering `name` with status 200 and a raw, non-JSON `body`.
#[allow(dead_code)] // Not every test file needs it
pub async fn mount_flag_body(server: &MockServer, name: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v3.1/name/{}", name.replace(' ', "%20"))))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// A minimal api-ninjas record for Brazil.
#[allow(dead_code)] // Not every test file needs it
pub fn brazil_record() -> Value {
    json!({
        "name": "Brazil",
        "iso2": "BR",
        "region": "South America",
        "population": 214.3,
        "capital": "Brasília",
        "currency": {"code": "BRL", "name": "Brazilian Real"},
        "gdp": 1608981.0,
        "gdp_per_capita": 7507.2,
        "surface_area": 8515767.0
    })
}
