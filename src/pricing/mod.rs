//! Pricing module for resort quotations.
//!
//! Holds the rate catalog and the quotation calculator, plus the public
//! endpoints that expose them.

pub mod calculators;
pub mod catalog;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_quotation, round_money, Quotation, QuotationError, TAX_RATE};
pub use catalog::PricingCatalog;
