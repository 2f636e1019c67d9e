//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Report output configuration.
    pub report: ReportConfig,
    /// Financial statement assumptions.
    pub statements: StatementsConfig,
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Reporting currency for workbooks that do not name one.
    pub currency: Currency,
    /// Workbook loaded when no path is given on the command line.
    pub workbook_path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            workbook_path: "data/workbook.json".to_string(),
        }
    }
}

/// Assumptions applied by the statement derivations.
///
/// Amounts and rates are decimals. Prefer quoted strings in config files
/// (`tax_rate = "0.24"`) so they never pass through a float.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatementsConfig {
    /// Fixed interest expense deducted below operating income.
    pub interest_expense: Decimal,
    /// Flat tax rate applied to positive pre-tax income.
    pub tax_rate: Decimal,
    /// Share of current assets treated as liquid for the quick ratio.
    pub quick_ratio_factor: Decimal,
    /// Maximum difference between assets and liabilities plus equity.
    pub balance_tolerance: Decimal,
    /// Cost rate for service sales.
    pub service_cost_rate: Decimal,
    /// Cost rate for every other sale.
    pub product_cost_rate: Decimal,
    /// Product-name fragments that mark a sale as a service.
    pub service_keywords: Vec<String>,
}

impl Default for StatementsConfig {
    fn default() -> Self {
        Self {
            interest_expense: Decimal::new(1500, 0),
            tax_rate: Decimal::new(24, 2),
            quick_ratio_factor: Decimal::new(8, 1),
            balance_tolerance: Decimal::new(1, 2),
            service_cost_rate: Decimal::new(15, 2),
            product_cost_rate: Decimal::new(40, 2),
            service_keywords: vec!["Service".to_string(), "Consulting".to_string()],
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `LEDGERDESK__SECTION__KEY` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
