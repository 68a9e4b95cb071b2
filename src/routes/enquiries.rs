//! Booking enquiry form submission

use axum::{extract::State, http::StatusCode, Json};
use chrono::Local;
use serde::Serialize;

use crate::error::Result;
use crate::extract::JsonBody;
use crate::models::{EnquiryId, EnquiryRequest, EnquiryStatus};
use crate::AppState;

/// Acknowledgement returned to the customer
#[derive(Debug, Serialize)]
pub struct EnquiryCreatedResponse {
    pub id: EnquiryId,
    pub status: EnquiryStatus,
    pub message: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Submit a booking enquiry
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<EnquiryRequest>,
) -> Result<(StatusCode, Json<EnquiryCreatedResponse>)> {
    let today = Local::now().date_naive();
    let enquiry = req.validate(today, &state.catalog)?;

    let booking_date = enquiry.booking_date;
    let id = state.store.insert(enquiry).await?;
    tracing::info!(id, %booking_date, "Booking enquiry received");

    Ok((
        StatusCode::CREATED,
        Json(EnquiryCreatedResponse {
            id,
            status: EnquiryStatus::Pending,
            message: "Thank you for your booking enquiry! Our team will contact you shortly to confirm your reservation.".to_string(),
            contact_email: state.contact.email.clone(),
            contact_phone: state.contact.phone.clone(),
        }),
    ))
}
