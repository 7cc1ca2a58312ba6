//! HTTP views: the landing page at `/` and the case converter at `/app/case`.
//!
//! The server renders the list for the first paint and for form submissions
//! without scripts. The page script then recomputes all six casings in place
//! on every keystroke. `/app/case?partial=true` returns the list alone.
//! Rendering is a pure function of the query, so handlers share no state.
use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;

use crate::casing;

pub mod page;

pub const LANDING_PATH: &str = "/";
pub const CASE_CONVERTER_PATH: &str = "/app/case";

#[derive(Debug, Default, Deserialize)]
pub struct CaseQuery {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub partial: Option<String>,
}

impl CaseQuery {
    /// Whether only the list fragment was requested.
    pub fn is_partial(&self) -> bool {
        matches!(self.partial.as_deref(), Some("true" | "1"))
    }
}

pub fn router() -> Router {
    Router::new()
        .route(LANDING_PATH, get(landing))
        .route(CASE_CONVERTER_PATH, get(case_converter))
        .fallback(not_found)
}

async fn landing() -> Html<String> {
    Html(page::landing())
}

async fn case_converter(Query(query): Query<CaseQuery>) -> Html<String> {
    tracing::debug!(
        input_len = query.input.len(),
        partial = query.is_partial(),
        "rendering case converter"
    );

    if query.is_partial() {
        Html(page::case_list(&casing::render(&query.input)))
    } else {
        Html(page::case_converter(&query.input))
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(page::not_found()))
}
