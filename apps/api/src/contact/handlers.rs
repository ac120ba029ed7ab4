//! Axum route handlers for the contact form API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::contact::form::FormPatch;
use crate::contact::service::FormSnapshot;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/contact/forms
pub async fn handle_open_form(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<FormSnapshot>), AppError> {
    Ok((StatusCode::CREATED, Json(state.contact.open().await?)))
}

/// GET /api/v1/contact/forms/:id
pub async fn handle_get_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    Ok(Json(state.contact.snapshot(id).await?))
}

/// PATCH /api/v1/contact/forms/:id
pub async fn handle_update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FormPatch>,
) -> Result<Json<FormSnapshot>, AppError> {
    Ok(Json(state.contact.update(id, patch).await?))
}

/// DELETE /api/v1/contact/forms/:id
pub async fn handle_close_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.contact.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/contact/forms/:id/submit
///
/// A relay failure is a form state, so it still answers 200 with `status: "error"`.
pub async fn handle_submit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    Ok(Json(state.contact.submit(id).await?))
}

/// POST /api/v1/contact/forms/:id/retry
pub async fn handle_retry_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    Ok(Json(state.contact.retry(id).await?))
}

/// POST /api/v1/contact/forms/:id/reset
pub async fn handle_reset_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    Ok(Json(state.contact.send_another(id).await?))
}
