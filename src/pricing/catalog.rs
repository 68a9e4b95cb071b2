//! Pricing catalog: service/package name to unit price.
//!
//! The catalog is loaded once at startup, either from a JSON file or from the
//! built-in resort rates, and shared read-only between handlers.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::config::ConfigError;

/// Catalog key holding the per-adult rate.
pub const ADULT_KEY: &str = "Adult";

/// Catalog key holding the per-child rate.
pub const CHILD_KEY: &str = "Child";

/// Name -> price mapping plus the list of bookable packages.
#[derive(Debug, Clone)]
pub struct PricingCatalog {
    currency: String,
    prices: BTreeMap<String, Decimal>,
    packages: Vec<String>,
    inclusions: Vec<String>,
}

/// On-disk catalog format.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_currency")]
    currency: String,
    prices: BTreeMap<String, Decimal>,
    #[serde(default)]
    packages: Option<Vec<String>>,
    #[serde(default)]
    inclusions: Vec<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl PricingCatalog {
    /// Build a catalog, checking that no price is negative.
    ///
    /// When `packages` is `None` every priced name except the per-head
    /// rates becomes bookable.
    pub fn new(
        currency: impl Into<String>,
        prices: BTreeMap<String, Decimal>,
        packages: Option<Vec<String>>,
        inclusions: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if let Some((name, price)) = prices.iter().find(|(_, p)| **p < Decimal::ZERO) {
            return Err(ConfigError::Catalog(format!(
                "price for '{}' is negative ({})",
                name, price
            )));
        }

        let packages = packages.unwrap_or_else(|| {
            prices
                .keys()
                .filter(|name| !is_per_head_key(name))
                .cloned()
                .collect()
        });

        let catalog = Self {
            currency: currency.into(),
            prices,
            packages,
            inclusions,
        };
        catalog.warn_on_gaps();
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_json::from_str(raw)
            .map_err(|e| ConfigError::Catalog(format!("invalid catalog JSON: {}", e)))?;
        Self::new(file.currency, file.prices, file.packages, file.inclusions)
    }

    /// Currency code all prices are expressed in
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Unit price for a name, if it is priced.
    pub fn price(&self, name: &str) -> Option<Decimal> {
        self.prices.get(name).copied()
    }

    /// All priced entries, ordered by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.prices.iter().map(|(name, price)| (name.as_str(), *price))
    }

    /// Package names a customer may select on the enquiry form.
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn is_bookable(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// What every stay includes.
    pub fn inclusions(&self) -> &[String] {
        &self.inclusions
    }

    fn warn_on_gaps(&self) {
        for key in [ADULT_KEY, CHILD_KEY] {
            if !self.prices.contains_key(key) {
                tracing::warn!(key, "Pricing catalog has no per-head rate; quotations will fail");
            }
        }
        for package in &self.packages {
            if !self.prices.contains_key(package) {
                tracing::warn!(
                    package = %package,
                    "Bookable package has no price; it will quote at zero"
                );
            }
        }
    }
}

impl Default for PricingCatalog {
    /// The resort's published rates.
    fn default() -> Self {
        let prices: BTreeMap<String, Decimal> = [
            (ADULT_KEY, dec!(30)),
            (CHILD_KEY, dec!(15)),
            ("Wellness Day (Spa & Massage)", dec!(25)),
            ("Individual Activities", dec!(5)),
            ("Braai Package (Starting)", dec!(5)),
            ("Own Cooler Box Fee", dec!(10)),
        ]
        .into_iter()
        .map(|(name, price)| (name.to_string(), price))
        .collect();

        let packages = prices
            .keys()
            .filter(|name| !is_per_head_key(name))
            .cloned()
            .collect();

        let inclusions = [
            "Comfortable Tented Accommodation",
            "Bed & Breakfast (Morning meal included)",
            "Guided Farm Tour",
            "Classic Farm Games",
            "Bonfire Chats",
            "Scenic Nature Walks",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            currency: default_currency(),
            prices,
            packages,
            inclusions,
        }
    }
}

fn is_per_head_key(name: &str) -> bool {
    name == ADULT_KEY || name == CHILD_KEY
}

/// Whether a rate is advertised as a starting price rather than a fixed one.
pub fn is_starting_price(name: &str) -> bool {
    name.contains("Starting")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_rates() {
        let catalog = PricingCatalog::default();
        assert_eq!(catalog.price(ADULT_KEY), Some(dec!(30)));
        assert_eq!(catalog.price(CHILD_KEY), Some(dec!(15)));
        assert_eq!(catalog.price("Wellness Day (Spa & Massage)"), Some(dec!(25)));
        assert_eq!(catalog.currency(), "USD");
    }

    #[test]
    fn test_default_packages_exclude_per_head_rates() {
        let catalog = PricingCatalog::default();
        assert!(!catalog.is_bookable(ADULT_KEY));
        assert!(!catalog.is_bookable(CHILD_KEY));
        assert!(catalog.is_bookable("Own Cooler Box Fee"));
        assert_eq!(catalog.packages().len(), 4);
    }

    #[test]
    fn test_from_json_with_explicit_packages() {
        let catalog = PricingCatalog::from_json(
            r#"{
                "currency": "ZAR",
                "prices": { "Adult": 300, "Child": "150.50", "Camping": 80 },
                "packages": ["Camping", "Custom Event"]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.currency(), "ZAR");
        assert_eq!(catalog.price(CHILD_KEY), Some(dec!(150.50)));
        // Packages are whatever the file lists, priced or not
        assert!(catalog.is_bookable("Custom Event"));
        assert_eq!(catalog.price("Custom Event"), None);
    }

    #[test]
    fn test_from_json_defaults() {
        let catalog =
            PricingCatalog::from_json(r#"{ "prices": { "Adult": 1, "Child": 1, "Tour": 2 } }"#)
                .unwrap();
        assert_eq!(catalog.currency(), "USD");
        assert_eq!(catalog.packages(), ["Tour".to_string()]);
        assert!(catalog.inclusions().is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = PricingCatalog::from_json(r#"{ "prices": { "Adult": -5 } }"#).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(PricingCatalog::from_json("not json").is_err());
    }

    #[test]
    fn test_starting_price_marker() {
        assert!(is_starting_price("Braai Package (Starting)"));
        assert!(!is_starting_price("Own Cooler Box Fee"));
    }
}
