//! Statement assumptions and cost-of-goods-sold policies.
//!
//! Neither the sales feed nor the chart of accounts carries real unit costs,
//! interest, or tax data. These figures are assumptions supplied by the
//! caller, defaulting to the values the dashboards have always shown.

use ledgerdesk_shared::StatementsConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::feeds::Sale;

/// Cost bucket a sale is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostClass {
    /// Services and consulting.
    Service,
    /// Licences and goods.
    Product,
}

/// Assigns a simulated cost to each completed sale.
pub trait CostPolicy {
    /// Picks the cost bucket for a sale.
    fn classify(&self, sale: &Sale) -> CostClass;

    /// Cost as a share of the sale amount for a bucket.
    fn cost_rate(&self, class: CostClass) -> Decimal;

    /// Simulated cost of a single sale.
    fn cost_of(&self, sale: &Sale) -> Decimal {
        sale.amount * self.cost_rate(self.classify(sale))
    }
}

/// Classifies sales by substring match on the product name.
///
/// A product containing any keyword (case-sensitive) is a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCostPolicy {
    /// Product-name fragments that mark a service.
    pub service_keywords: Vec<String>,
    /// Cost rate for services.
    pub service_rate: Decimal,
    /// Cost rate for products.
    pub product_rate: Decimal,
}

impl Default for KeywordCostPolicy {
    fn default() -> Self {
        Self {
            service_keywords: vec!["Service".to_string(), "Consulting".to_string()],
            service_rate: Decimal::new(15, 2),
            product_rate: Decimal::new(40, 2),
        }
    }
}

impl KeywordCostPolicy {
    /// Builds the policy from configuration.
    pub fn from_config(config: &StatementsConfig) -> Result<Self, ReportError> {
        check_rate("service_cost_rate", config.service_cost_rate)?;
        check_rate("product_cost_rate", config.product_cost_rate)?;

        Ok(Self {
            service_keywords: config.service_keywords.clone(),
            service_rate: config.service_cost_rate,
            product_rate: config.product_cost_rate,
        })
    }
}

impl CostPolicy for KeywordCostPolicy {
    fn classify(&self, sale: &Sale) -> CostClass {
        if self
            .service_keywords
            .iter()
            .any(|keyword| sale.product.contains(keyword.as_str()))
        {
            CostClass::Service
        } else {
            CostClass::Product
        }
    }

    fn cost_rate(&self, class: CostClass) -> Decimal {
        match class {
            CostClass::Service => self.service_rate,
            CostClass::Product => self.product_rate,
        }
    }
}

/// Fixed assumptions applied by the statement derivations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementAssumptions {
    /// Interest expense deducted below operating income.
    pub interest_expense: Decimal,
    /// Flat tax rate on positive pre-tax income.
    pub tax_rate: Decimal,
    /// Share of current assets treated as liquid for the quick ratio.
    pub quick_ratio_factor: Decimal,
    /// Maximum gap between assets and liabilities plus equity.
    pub balance_tolerance: Decimal,
}

impl Default for StatementAssumptions {
    fn default() -> Self {
        Self {
            interest_expense: Decimal::new(1500, 0),
            tax_rate: Decimal::new(24, 2),
            quick_ratio_factor: Decimal::new(8, 1),
            balance_tolerance: Decimal::new(1, 2),
        }
    }
}

impl StatementAssumptions {
    /// Builds assumptions from configuration.
    pub fn from_config(config: &StatementsConfig) -> Result<Self, ReportError> {
        let assumptions = Self {
            interest_expense: config.interest_expense,
            tax_rate: config.tax_rate,
            quick_ratio_factor: config.quick_ratio_factor,
            balance_tolerance: config.balance_tolerance,
        };
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Checks every assumption is in range.
    pub fn validate(&self) -> Result<(), ReportError> {
        check_rate("tax_rate", self.tax_rate)?;
        check_rate("quick_ratio_factor", self.quick_ratio_factor)?;
        check_non_negative("interest_expense", self.interest_expense)?;
        check_non_negative("balance_tolerance", self.balance_tolerance)
    }
}

fn check_rate(name: &'static str, value: Decimal) -> Result<(), ReportError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ReportError::RateOutOfRange { name, value });
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: Decimal) -> Result<(), ReportError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ReportError::NegativeAssumption { name, value });
    }
    Ok(())
}
