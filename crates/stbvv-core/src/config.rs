//! Application configuration
//!
//! Centralized configuration management using the `config` crate. The
//! statutory rates (VAT, expense-fee rate and cap, plausibility floor)
//! ship with compiled-in defaults matching the current StBVV/UStG values
//! and can be overridden from config files or environment variables, so a
//! statutory amendment is a data change rather than a code change.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub billing: BillingConfig,
}

/// Billing-specific configuration
///
/// Monetary values are carried as f64 here; the engine converts them to
/// `Decimal` once at construction.
#[derive(Debug, Deserialize, Clone)]
pub struct BillingConfig {
    /// VAT rate applied to the discounted net total (UStG §12: 19%)
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Expense fee percentage of the adjusted fee (StBVV §16: 20%)
    #[serde(default = "default_expense_fee_rate")]
    pub expense_fee_rate: f64,

    /// Expense fee ceiling per position (StBVV §16: 20.00 EUR)
    #[serde(default = "default_expense_fee_cap")]
    pub expense_fee_cap: f64,

    /// Gross totals below this floor trigger a plausibility warning
    #[serde(default = "default_min_total_warning")]
    pub min_total_warning: f64,

    /// Maximum number of positions per document
    #[serde(default = "default_max_positions")]
    pub max_positions: usize,
}

fn default_vat_rate() -> f64 {
    0.19
}

fn default_expense_fee_rate() -> f64 {
    0.20
}

fn default_expense_fee_cap() -> f64 {
    20.00
}

fn default_min_total_warning() -> f64 {
    50.00
}

fn default_max_positions() -> usize {
    100
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with statutory default values
            .set_default("billing.vat_rate", 0.19)?
            .set_default("billing.expense_fee_rate", 0.20)?
            .set_default("billing.expense_fee_cap", 20.00)?
            .set_default("billing.min_total_warning", 50.00)?
            .set_default("billing.max_positions", 100)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with STBVV_ prefix
            .add_source(
                Environment::with_prefix("STBVV")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("STBVV").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            vat_rate: 0.19,
            expense_fee_rate: 0.20,
            expense_fee_cap: 20.00,
            min_total_warning: 50.00,
            max_positions: 100,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            billing: BillingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_billing_config() {
        let config = BillingConfig::default();
        assert_eq!(config.vat_rate, 0.19);
        assert_eq!(config.expense_fee_cap, 20.00);
        assert_eq!(config.max_positions, 100);
    }
}
