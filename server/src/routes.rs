use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use crate::{catalog::OptionItem, error::AppError, state::AppState};

/// Fixed acknowledgment body for `/submit`.
pub const SUBMIT_ACK: &str = "options received";

#[derive(Deserialize)]
pub struct OptionsParams {
    search: Option<String>,
}

#[derive(Deserialize)]
pub struct Submission {
    #[serde(rename = "selectedOptions")]
    pub selected_options: Vec<String>,
}

/// `GET /options?search=<query>`
///
/// A missing `search` is a bad request, checked before any lower-casing.
/// An empty `search` matches the whole catalog.
pub async fn options_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<OptionsParams>,
) -> Result<Json<Vec<OptionItem>>, AppError> {
    let search = params.search.ok_or(AppError::MissingQuery)?;

    Ok(Json(state.catalog.filter(&search)))
}

/// `POST /submit`
///
/// Accepts unconditionally. The payload is logged and discarded; values
/// are not checked against the catalog.
pub async fn submit_handler(Json(payload): Json<Submission>) -> impl IntoResponse {
    info!("Received options: {:?}", payload.selected_options);

    (StatusCode::OK, SUBMIT_ACK)
}
