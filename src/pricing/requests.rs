//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to quote a party and package without submitting an enquiry
#[derive(Debug, Deserialize)]
pub struct QuotationRequest {
    #[serde(default)]
    pub num_adults: u32,
    #[serde(default)]
    pub num_children: u32,
    pub package: String,
}
