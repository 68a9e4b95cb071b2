//! Public pricing endpoints

use axum::{extract::State, Json};

use super::calculators::{compute_quotation, Quotation};
use super::requests::QuotationRequest;
use super::responses::PricingResponse;
use crate::error::Result;
use crate::extract::JsonBody;
use crate::AppState;

/// Rates listing for the pricing section and the booking form's package choices
pub async fn rates(State(state): State<AppState>) -> Json<PricingResponse> {
    Json(PricingResponse::from(state.catalog.as_ref()))
}

/// Quote a party and package
pub async fn quote(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuotationRequest>,
) -> Result<Json<Quotation>> {
    let quotation = compute_quotation(
        &state.catalog,
        req.num_adults,
        req.num_children,
        &req.package,
    )?;
    warn_if_unpriced(&quotation);
    Ok(Json(quotation))
}

/// Log quotations where the package silently priced at zero
pub(crate) fn warn_if_unpriced(quotation: &Quotation) {
    if !quotation.package_recognized {
        tracing::warn!(
            package = %quotation.package,
            "Package not in pricing catalog, quoted at zero"
        );
    }
}
