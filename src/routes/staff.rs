//! Staff dashboard route handlers
//!
//! Everything except `login` requires a [`StaffSession`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::error::{AppError, Result};
use crate::extract::JsonBody;
use crate::models::{Enquiry, EnquiryId, EnquiryStatus, EnquirySummary};
use crate::pricing::routes::warn_if_unpriced;
use crate::pricing::{compute_quotation, Quotation};
use crate::session::StaffSession;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_in_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesUpdateRequest {
    #[serde(default)]
    pub notes: String,
}

/// Exchange staff credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if !auth::verify_staff(&state.staff, &req.username, &req.password) {
        tracing::warn!(username = %req.username, "Failed staff login");
        return Err(AppError::InvalidCredentials);
    }

    let session = state.sessions.create(&req.username).await;
    Ok(Json(LoginResponse {
        token: session.token,
        username: session.username,
        expires_in_secs: state.sessions.ttl().as_secs(),
    }))
}

pub async fn logout(State(state): State<AppState>, session: StaffSession) -> StatusCode {
    state.sessions.invalidate(&session.token).await;
    tracing::info!(username = %session.username, "Staff session ended");
    StatusCode::NO_CONTENT
}

/// All enquiries, newest first
pub async fn list(
    State(state): State<AppState>,
    _session: StaffSession,
) -> Result<Json<Vec<Enquiry>>> {
    let enquiries = state.store.fetch_all().await?;
    Ok(Json(enquiries))
}

/// Dashboard headline numbers
pub async fn summary(
    State(state): State<AppState>,
    _session: StaffSession,
) -> Result<Json<EnquirySummary>> {
    let enquiries = state.store.fetch_all().await?;
    Ok(Json(EnquirySummary::from_enquiries(&enquiries)))
}

/// Quotation for a stored enquiry, priced with the current catalog
pub async fn quotation(
    State(state): State<AppState>,
    _session: StaffSession,
    Path(id): Path<EnquiryId>,
) -> Result<Json<Quotation>> {
    let enquiry = state.store.fetch(id).await?;
    let quotation = compute_quotation(
        &state.catalog,
        enquiry.num_adults,
        enquiry.num_children,
        &enquiry.package,
    )?;
    warn_if_unpriced(&quotation);
    Ok(Json(quotation))
}

pub async fn update_status(
    State(state): State<AppState>,
    session: StaffSession,
    Path(id): Path<EnquiryId>,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> Result<StatusCode> {
    let status: EnquiryStatus = req.status.trim().parse()?;
    state.store.update_status(id, status).await?;
    tracing::info!(id, %status, username = %session.username, "Enquiry status updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_notes(
    State(state): State<AppState>,
    session: StaffSession,
    Path(id): Path<EnquiryId>,
    JsonBody(req): JsonBody<NotesUpdateRequest>,
) -> Result<StatusCode> {
    state.store.update_notes(id, &req.notes).await?;
    tracing::info!(id, username = %session.username, "Enquiry notes saved");
    Ok(StatusCode::NO_CONTENT)
}
