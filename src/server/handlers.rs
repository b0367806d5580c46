//! Web server HTTP handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::country::CountrySource;
use crate::flag::FlagSource;
use crate::translate::Translator;

use super::types::{AppState, LookupParams};

/// The page: prompt, and the result of the submission in `?pais=` if present.
pub async fn page_handler<T, C, F>(
    State(state): State<AppState<T, C, F>>,
    Query(params): Query<LookupParams>,
) -> Response
where
    T: Translator,
    C: CountrySource,
    F: FlagSource,
{
    let input = params.pais.unwrap_or_default();
    let outcome = state.pipeline.run(&input).await;

    match state.page.render(&input, &outcome) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render page: {}", e),
            )
                .into_response()
        }
    }
}

/// The same submission as [`page_handler`], answered as JSON.
pub async fn lookup_handler<T, C, F>(
    State(state): State<AppState<T, C, F>>,
    Query(params): Query<LookupParams>,
) -> Response
where
    T: Translator,
    C: CountrySource,
    F: FlagSource,
{
    let input = params.pais.unwrap_or_default();
    let outcome = state.pipeline.run(&input).await;
    (StatusCode::OK, Json(outcome)).into_response()
}

pub async fn health_handler() -> &'static str {
    "ok"
}
