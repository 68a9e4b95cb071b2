//! Core pricing calculation functions.
//!
//! Pure functions for quotation math - no database access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::catalog::{PricingCatalog, ADULT_KEY, CHILD_KEY};

/// Flat tax applied to every quotation subtotal (12%).
pub const TAX_RATE: Decimal = dec!(0.12);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pachena_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Quotation calculation errors.
///
/// These are configuration faults in the catalog, or amounts too large to
/// represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuotationError {
    #[error("pricing catalog has no '{key}' rate")]
    MissingPrice { key: String },

    #[error("quotation amount is out of range")]
    Overflow,
}

/// Itemized quotation breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quotation {
    pub num_adults: u32,
    pub num_children: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub adult_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub child_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub adults_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub children_total: Decimal,
    pub package: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub package_price: Decimal,
    /// False when the package is not in the catalog and was quoted at zero
    pub package_recognized: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub currency: String,
}

/// Compute a priced, taxed quotation for a party and package.
///
/// Per-head rates come from the catalog's `"Adult"` and `"Child"` entries.
/// A package the catalog does not price contributes zero rather than failing,
/// so negotiated or custom packages can still be quoted on head count alone;
/// `package_recognized` reports when that happened.
///
/// Tax is rounded to cents with banker's rounding and added to the subtotal.
///
/// # Errors
/// `QuotationError::MissingPrice` if either per-head rate is absent,
/// `QuotationError::Overflow` if an amount exceeds `Decimal`'s range.
pub fn compute_quotation(
    catalog: &PricingCatalog,
    num_adults: u32,
    num_children: u32,
    package: &str,
) -> Result<Quotation, QuotationError> {
    let adult_price = per_head_rate(catalog, ADULT_KEY)?;
    let child_price = per_head_rate(catalog, CHILD_KEY)?;

    let adults_total = checked(Decimal::from(num_adults).checked_mul(adult_price))?;
    let children_total = checked(Decimal::from(num_children).checked_mul(child_price))?;

    let (package_price, package_recognized) = match catalog.price(package) {
        Some(price) => (price, true),
        None => (Decimal::ZERO, false),
    };

    let subtotal = checked(
        adults_total
            .checked_add(children_total)
            .and_then(|sum| sum.checked_add(package_price)),
    )?;
    let tax = round_money(checked(subtotal.checked_mul(TAX_RATE))?, 2);
    let total = checked(subtotal.checked_add(tax))?;

    Ok(Quotation {
        num_adults,
        num_children,
        adult_price,
        child_price,
        adults_total,
        children_total,
        package: package.to_string(),
        package_price,
        package_recognized,
        subtotal,
        tax_rate: TAX_RATE,
        tax,
        total,
        currency: catalog.currency().to_string(),
    })
}

fn checked(amount: Option<Decimal>) -> Result<Decimal, QuotationError> {
    amount.ok_or(QuotationError::Overflow)
}

fn per_head_rate(catalog: &PricingCatalog, key: &str) -> Result<Decimal, QuotationError> {
    catalog.price(key).ok_or_else(|| QuotationError::MissingPrice {
        key: key.to_string(),
    })
}
