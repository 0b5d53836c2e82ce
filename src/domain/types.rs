//! Validated numeric types for loan calculations
//!
//! This module provides newtypes for the quantities the calculation engine
//! works with, so that an amount, a percentage and a term can never be
//! confused and every value has been range-checked before arithmetic runs.

use crate::domain::validation_constants::{limits, mortgage};
use nutype::nutype;
use rust_decimal::Decimal;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Purchase price of a home (strictly positive)
#[nutype(
    validate(predicate = |price| *price > Decimal::ZERO && *price <= limits::MAX_CURRENCY_AMOUNT),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct HomePrice(Decimal);

/// Principal borrowed against a home
#[nutype(
    validate(predicate = |amount| *amount >= Decimal::ZERO && *amount <= limits::MAX_CURRENCY_AMOUNT),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct LoanAmount(Decimal);

/// Any other non-negative currency amount (fees, debts, cash on hand)
#[nutype(
    validate(predicate = |amount| *amount >= Decimal::ZERO && *amount <= limits::MAX_CURRENCY_AMOUNT),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct CurrencyAmount(Decimal);

/// Gross annual income (strictly positive)
#[nutype(
    validate(predicate = |income| *income > Decimal::ZERO && *income <= limits::MAX_CURRENCY_AMOUNT),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct AnnualIncome(Decimal);

impl AnnualIncome {
    /// Gross income for a single month
    pub fn monthly(&self) -> Decimal {
        self.into_inner() / Decimal::from(mortgage::MONTHS_PER_YEAR)
    }
}

/// A percentage between 0 and 100 inclusive
#[nutype(
    validate(predicate = |pct| *pct >= Decimal::ZERO && *pct <= limits::MAX_PERCENTAGE),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Apply this percentage to an amount: `amount * pct / 100`
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.into_inner() / mortgage::PERCENT_DIVISOR
    }
}

/// Nominal annual interest rate in percent (e.g. `6.5` for 6.5%)
#[nutype(
    validate(predicate = |rate| *rate >= Decimal::ZERO && *rate <= limits::MAX_ANNUAL_RATE_PERCENT),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, AsRef, Display)
)]
pub struct AnnualRatePercent(Decimal);

impl AnnualRatePercent {
    /// Periodic rate applied each month, as a fraction
    pub fn monthly_rate(&self) -> Decimal {
        self.into_inner() / mortgage::PERCENT_DIVISOR / Decimal::from(mortgage::MONTHS_PER_YEAR)
    }
}

/// Loan term in whole years
#[nutype(
    validate(predicate = |years| *years > 0 && *years <= limits::MAX_LOAN_TERM_YEARS),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRef, Display)
)]
pub struct LoanTermYears(u32);

impl LoanTermYears {
    /// Number of monthly payments over the term
    pub fn months(&self) -> u32 {
        self.into_inner() * mortgage::MONTHS_PER_YEAR
    }
}
