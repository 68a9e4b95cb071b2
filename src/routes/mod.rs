//! HTTP routes

pub mod enquiries;
pub mod staff;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::pricing;
use crate::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the application router (without middleware layers)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/pricing", get(pricing::routes::rates))
        .route("/api/quotation", post(pricing::routes::quote))
        .route("/api/enquiries", post(enquiries::submit))
        .route("/api/staff/login", post(staff::login))
        .route("/api/staff/logout", post(staff::logout))
        .route("/api/staff/enquiries", get(staff::list))
        .route("/api/staff/summary", get(staff::summary))
        .route("/api/staff/enquiries/:id/quotation", get(staff::quotation))
        .route("/api/staff/enquiries/:id/status", put(staff::update_status))
        .route("/api/staff/enquiries/:id/notes", put(staff::update_notes))
}
