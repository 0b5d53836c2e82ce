//! Input validation for calculator scenarios
//!
//! Validation never stops at the first problem: every offending field is
//! collected so a form can highlight all of them at once.

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names of the scenario fields a violation can point at
///
/// Displayed and serialized with the same camelCase names the JSON input uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioField {
    #[display("homePrice")]
    HomePrice,
    #[display("downPaymentPercent")]
    DownPaymentPercent,
    #[display("interestRateAnnualPercent")]
    InterestRateAnnualPercent,
    #[display("loanTermYears")]
    LoanTermYears,
    #[display("propertyTaxPercent")]
    PropertyTaxPercent,
    #[display("propertyTaxAnnualAmount")]
    PropertyTaxAnnualAmount,
    #[display("monthlyHomeInsurance")]
    MonthlyHomeInsurance,
    #[display("monthlyHoaFees")]
    MonthlyHoaFees,
    #[display("pmiPercent")]
    PmiPercent,
    #[display("annualIncome")]
    AnnualIncome,
    #[display("monthlyDebt")]
    MonthlyDebt,
    #[display("downPaymentAmount")]
    DownPaymentAmount,
    #[display("debtToIncomeRatioPercent")]
    DebtToIncomeRatioPercent,
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReason {
    #[display("must be greater than zero")]
    NotPositive,
    #[display("must not be negative")]
    Negative,
    #[display("must be at least {min}")]
    BelowMinimum { min: Decimal },
    #[display("must be at most {max}")]
    AboveMaximum { max: Decimal },
    #[display("must be one of {allowed:?}")]
    NotAllowedOption { allowed: Vec<u32> },
    #[display("either a property tax percentage or an annual property tax amount is required")]
    MissingPropertyTax,
    #[display("property tax percentage and annual amount are mutually exclusive")]
    ConflictingPropertyTax,
    #[display("exceeds the supported range")]
    Unsupported,
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[display("{field} {reason}")]
pub struct FieldViolation {
    pub field: ScenarioField,
    pub reason: ViolationReason,
}

/// One or more scenario fields are out of range
///
/// Always carries at least one violation and lists every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("invalid input: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// All violations, in field order of the scenario
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The distinct fields that were rejected
    pub fn fields(&self) -> Vec<ScenarioField> {
        let mut fields: Vec<ScenarioField> = Vec::with_capacity(self.violations.len());
        for violation in &self.violations {
            if !fields.contains(&violation.field) {
                fields.push(violation.field);
            }
        }
        fields
    }

    /// Whether the given field is among the rejected ones
    pub fn mentions(&self, field: ScenarioField) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates violations while a scenario is checked field by field
///
/// Each check returns whether the value passed, so checks on one field can be
/// chained with `&&` and stop at that field's first problem.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldViolation>);

impl Violations {
    pub(crate) fn push(&mut self, field: ScenarioField, reason: ViolationReason) {
        self.0.push(FieldViolation { field, reason });
    }

    pub(crate) fn positive(&mut self, field: ScenarioField, value: Decimal) -> bool {
        if value > Decimal::ZERO {
            true
        } else {
            self.push(field, ViolationReason::NotPositive);
            false
        }
    }

    pub(crate) fn non_negative(&mut self, field: ScenarioField, value: Decimal) -> bool {
        if value >= Decimal::ZERO {
            true
        } else {
            self.push(field, ViolationReason::Negative);
            false
        }
    }

    pub(crate) fn within(
        &mut self,
        field: ScenarioField,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    ) -> bool {
        if value < min {
            self.push(field, ViolationReason::BelowMinimum { min });
            false
        } else if value > max {
            self.push(field, ViolationReason::AboveMaximum { max });
            false
        } else {
            true
        }
    }

    pub(crate) fn one_of(&mut self, field: ScenarioField, value: u32, allowed: &[u32]) -> bool {
        if allowed.contains(&value) {
            true
        } else {
            self.push(
                field,
                ViolationReason::NotAllowedOption {
                    allowed: allowed.to_vec(),
                },
            );
            false
        }
    }

    /// Record a newtype construction failure as an unsupported value
    pub(crate) fn convert<T, E>(&mut self, field: ScenarioField, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(_) => {
                self.push(field, ViolationReason::Unsupported);
                None
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError { violations: self.0 }
    }
}
