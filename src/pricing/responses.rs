//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{is_starting_price, PricingCatalog};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// One advertised rate
#[derive(Debug, Serialize)]
pub struct RateResponse {
    pub name: String,
    pub price: MoneyResponse,
    /// The rate is a "starting at" price, not a fixed one
    pub starting_from: bool,
}

/// Response for the public rates listing
#[derive(Debug, Serialize)]
pub struct PricingResponse {
    pub currency: String,
    pub rates: Vec<RateResponse>,
    pub packages: Vec<String>,
    pub inclusions: Vec<String>,
}

impl From<&PricingCatalog> for PricingResponse {
    fn from(catalog: &PricingCatalog) -> Self {
        let currency = catalog.currency().to_string();
        let rates = catalog
            .entries()
            .map(|(name, amount)| RateResponse {
                name: name.to_string(),
                price: MoneyResponse {
                    amount,
                    currency: currency.clone(),
                },
                starting_from: is_starting_price(name),
            })
            .collect();

        Self {
            rates,
            packages: catalog.packages().to_vec(),
            inclusions: catalog.inclusions().to_vec(),
            currency,
        }
    }
}
