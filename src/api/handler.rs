//! Request handlers

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::database::Chirp;

use super::{ApiError, AppState};

/// Incoming chirp payload
#[derive(Debug, Deserialize)]
pub struct ChirpRequest {
    pub body: String,
}

/// Response for `/api/validate_chirp`
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub cleaned_body: String,
}

// =============================================================================
// Middleware
// =============================================================================

/// Count every request reaching the file server
pub async fn count_hits(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let total = state.hits.record();
    tracing::trace!(total, path = %request.uri().path(), "File server hit");
    next.run(request).await
}

// =============================================================================
// Admin / Health
// =============================================================================

/// Admin page with the hit count
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"
    <html>

        <body>
            <h1>Welcome, Chirpy Admin</h1>
            <p>Chirpy has been visited {} times!</p>
        </body>

    </html>
    "#,
        state.hits.hits()
    ))
}

/// Reset the hit count
pub async fn reset(State(state): State<AppState>) -> StatusCode {
    state.hits.reset();
    tracing::info!("Hit counter reset");
    StatusCode::OK
}

/// Liveness probe
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

// =============================================================================
// Chirps
// =============================================================================

/// Validate and clean a body without storing it
pub async fn validate_chirp(
    State(state): State<AppState>,
    Json(request): Json<ChirpRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let cleaned_body = state.filter.moderate(&request.body)?;

    Ok(Json(ValidateResponse {
        valid: true,
        cleaned_body,
    }))
}

/// Moderate a body and store it
pub async fn create_chirp(
    State(state): State<AppState>,
    Json(request): Json<ChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), ApiError> {
    let cleaned_body = state.filter.moderate(&request.body)?;

    let db = Arc::clone(&state.db);
    let chirp = tokio::task::spawn_blocking(move || db.create_chirp(&cleaned_body)).await??;

    tracing::debug!(id = chirp.id, "Chirp created");
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// All chirps, order unspecified
pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<Chirp>>, ApiError> {
    let db = Arc::clone(&state.db);
    let chirps = tokio::task::spawn_blocking(move || db.list_chirps()).await??;

    Ok(Json(chirps))
}
