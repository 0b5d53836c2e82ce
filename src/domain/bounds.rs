//! Calculator bounds and defaults supplied by the settings provider
//!
//! Both are plain immutable values passed into every engine call. Field names
//! deserialize from snake_case configuration keys and serialize as camelCase
//! for the calculator screens.

use crate::domain::validation_constants::limits;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid ranges for calculator inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct CalculatorBounds {
    pub home_price_min: Decimal,
    pub home_price_max: Decimal,
    pub down_payment_min: Decimal,
    pub down_payment_max: Decimal,
    pub interest_rate_min: Decimal,
    pub interest_rate_max: Decimal,
    /// UI granularity only; rates between steps are accepted
    pub interest_rate_step: Decimal,
    pub loan_term_options: Vec<u32>,
    pub pmi_min: Decimal,
    pub pmi_max: Decimal,
    pub pmi_step: Decimal,
    pub dti_ratio_min: Decimal,
    pub dti_ratio_max: Decimal,
    pub dti_ratio_step: Decimal,
}

impl Default for CalculatorBounds {
    fn default() -> Self {
        Self {
            home_price_min: dec!(50000),
            home_price_max: dec!(5000000),
            down_payment_min: dec!(3),
            down_payment_max: dec!(100),
            interest_rate_min: dec!(1),
            interest_rate_max: dec!(15),
            interest_rate_step: dec!(0.1),
            loan_term_options: vec![10, 15, 20, 30],
            pmi_min: dec!(0),
            pmi_max: dec!(2),
            pmi_step: dec!(0.1),
            dti_ratio_min: dec!(20),
            dti_ratio_max: dec!(50),
            dti_ratio_step: dec!(1),
        }
    }
}

/// Misconfigured calculator bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("{option}: range {min}..={max} is empty or outside 0..={ceiling}")]
    InvalidRange {
        option: &'static str,
        min: Decimal,
        max: Decimal,
        ceiling: Decimal,
    },

    #[error("{option}: step must be greater than zero, got {step}")]
    NonPositiveStep { option: &'static str, step: Decimal },

    #[error("loan_term_options must list at least one term")]
    NoTermOptions,

    #[error("loan_term_options: {0} years is outside the supported 1..=50")]
    UnsupportedTerm(u32),
}

impl CalculatorBounds {
    /// Check that every range is non-empty and representable
    pub fn validate(&self) -> Result<(), BoundsError> {
        check_range(
            "home_price",
            self.home_price_min,
            self.home_price_max,
            limits::MAX_CURRENCY_AMOUNT,
        )?;
        if self.home_price_min <= Decimal::ZERO {
            return Err(BoundsError::InvalidRange {
                option: "home_price",
                min: self.home_price_min,
                max: self.home_price_max,
                ceiling: limits::MAX_CURRENCY_AMOUNT,
            });
        }
        check_range(
            "down_payment",
            self.down_payment_min,
            self.down_payment_max,
            limits::MAX_PERCENTAGE,
        )?;
        check_range(
            "interest_rate",
            self.interest_rate_min,
            self.interest_rate_max,
            limits::MAX_ANNUAL_RATE_PERCENT,
        )?;
        check_step("interest_rate_step", self.interest_rate_step)?;
        check_range("pmi", self.pmi_min, self.pmi_max, limits::MAX_PERCENTAGE)?;
        check_step("pmi_step", self.pmi_step)?;
        check_range(
            "dti_ratio",
            self.dti_ratio_min,
            self.dti_ratio_max,
            limits::MAX_PERCENTAGE,
        )?;
        check_step("dti_ratio_step", self.dti_ratio_step)?;

        if self.loan_term_options.is_empty() {
            return Err(BoundsError::NoTermOptions);
        }
        if let Some(term) = self
            .loan_term_options
            .iter()
            .find(|term| **term == 0 || **term > limits::MAX_LOAN_TERM_YEARS)
        {
            return Err(BoundsError::UnsupportedTerm(*term));
        }
        Ok(())
    }
}

fn check_range(
    option: &'static str,
    min: Decimal,
    max: Decimal,
    ceiling: Decimal,
) -> Result<(), BoundsError> {
    if min < Decimal::ZERO || min > max || max > ceiling {
        return Err(BoundsError::InvalidRange {
            option,
            min,
            max,
            ceiling,
        });
    }
    Ok(())
}

fn check_step(option: &'static str, step: Decimal) -> Result<(), BoundsError> {
    if step <= Decimal::ZERO {
        return Err(BoundsError::NonPositiveStep { option, step });
    }
    Ok(())
}

/// Pre-filled values shown when a calculator first opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct CalculatorDefaults {
    pub home_price: Decimal,
    pub down_payment_percent: Decimal,
    pub interest_rate_annual_percent: Decimal,
    pub loan_term_years: u32,
    pub property_tax_percent: Decimal,
    pub monthly_home_insurance: Decimal,
    pub monthly_hoa_fees: Decimal,
    pub pmi_percent: Decimal,
    pub annual_income: Decimal,
    pub monthly_debt: Decimal,
    pub down_payment_amount: Decimal,
    pub debt_to_income_ratio_percent: Decimal,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            home_price: dec!(400000),
            down_payment_percent: dec!(20),
            interest_rate_annual_percent: dec!(6.5),
            loan_term_years: 30,
            property_tax_percent: dec!(1.2),
            monthly_home_insurance: dec!(100),
            monthly_hoa_fees: dec!(0),
            pmi_percent: dec!(0.5),
            annual_income: dec!(100000),
            monthly_debt: dec!(500),
            down_payment_amount: dec!(80000),
            debt_to_income_ratio_percent: dec!(36),
        }
    }
}

/// Everything the settings provider hands to the calculators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub bounds: CalculatorBounds,
    pub defaults: CalculatorDefaults,
}
