//! Application configuration loaded from the environment

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::pricing::catalog::PricingCatalog;

/// Configuration errors, fatal at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Pricing catalog error: {0}")]
    Catalog(String),
}

/// Resort contact details shown to customers after they submit an enquiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "pachenaresort@gmail.com".to_string(),
            phone: "+263 775 387 683 / 0786 714 774".to_string(),
        }
    }
}

/// Staff login settings
#[derive(Debug, Clone)]
pub struct StaffConfig {
    pub username: String,
    /// Argon2 PHC string; login is disabled when absent
    pub password_hash: Option<String>,
    pub session_ttl: Duration,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; the in-memory store is used when unset
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub catalog_path: Option<PathBuf>,
    pub staff: StaffConfig,
    pub contact: ContactInfo,
}

const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parse_var("PORT", var("PORT"), 3000)?;
        let bind_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::InvalidVar {
                name: "HOST",
                value: host,
            })?;

        let defaults = ContactInfo::default();

        Ok(Self {
            database_url: var("DATABASE_URL"),
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                var("DATABASE_MAX_CONNECTIONS"),
                5,
            )?,
            bind_addr,
            catalog_path: var("PRICING_CATALOG_PATH").map(PathBuf::from),
            staff: StaffConfig {
                username: var("STAFF_USERNAME").unwrap_or_else(|| "admin".to_string()),
                password_hash: var("STAFF_PASSWORD_HASH"),
                session_ttl: Duration::from_secs(parse_var(
                    "SESSION_TTL_SECS",
                    var("SESSION_TTL_SECS"),
                    DEFAULT_SESSION_TTL_SECS,
                )?),
            },
            contact: ContactInfo {
                email: var("CONTACT_EMAIL").unwrap_or(defaults.email),
                phone: var("CONTACT_PHONE").unwrap_or(defaults.phone),
            },
        })
    }

    /// Load the configured pricing catalog, or the built-in rates.
    pub fn load_catalog(&self) -> Result<PricingCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = PricingCatalog::from_path(path)?;
                tracing::info!(path = %path.display(), "Loaded pricing catalog");
                Ok(catalog)
            }
            None => {
                tracing::info!("PRICING_CATALOG_PATH not set, using built-in rates");
                Ok(PricingCatalog::default())
            }
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.staff.username, "admin");
        assert!(config.staff.password_hash.is_none());
        assert_eq!(config.staff.session_ttl, Duration::from_secs(28_800));
        assert_eq!(config.contact, ContactInfo::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/pachena"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STAFF_USERNAME", "reception"),
            ("SESSION_TTL_SECS", "600"),
            ("CONTACT_EMAIL", "bookings@example.com"),
        ])
        .unwrap();

        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/pachena"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.staff.username, "reception");
        assert_eq!(config.staff.session_ttl, Duration::from_secs(600));
        assert_eq!(config.contact.email, "bookings@example.com");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("DATABASE_URL", ""), ("STAFF_PASSWORD_HASH", "  ")]).unwrap();
        assert!(config.database_url.is_none());
        assert!(config.staff.password_hash.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVar { name: "PORT", .. }));
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(config_from(&[("HOST", "not a host")]).is_err());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = config_from(&[("PRICING_CATALOG_PATH", "/nonexistent/catalog.json")]).unwrap();
        assert!(matches!(config.load_catalog(), Err(ConfigError::Catalog(_))));
    }

    #[test]
    fn test_builtin_catalog_when_unset() {
        let config = config_from(&[]).unwrap();
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.currency(), "USD");
    }
}
