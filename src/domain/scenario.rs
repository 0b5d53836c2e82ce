//! Calculator inputs
//!
//! Scenarios arrive as raw, possibly out-of-range values. `validate` checks
//! them against the configured bounds and returns the validated form the
//! engine computes with, or a `ValidationError` naming every bad field.

use crate::domain::bounds::{CalculatorBounds, CalculatorDefaults};
use crate::domain::types::{
    AnnualIncome, AnnualRatePercent, CurrencyAmount, HomePrice, LoanTermYears, Percentage,
};
use crate::domain::validation::{ScenarioField, ValidationError, ViolationReason, Violations};
use crate::domain::validation_constants::{limits, mortgage};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Payment calculator input
///
/// Exactly one of `property_tax_percent` and `property_tax_annual_amount`
/// must be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanScenario {
    pub home_price: Decimal,
    pub down_payment_percent: Decimal,
    pub interest_rate_annual_percent: Decimal,
    pub loan_term_years: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_tax_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_tax_annual_amount: Option<Decimal>,
    #[serde(default)]
    pub monthly_home_insurance: Decimal,
    #[serde(default)]
    pub monthly_hoa_fees: Decimal,
    #[serde(default)]
    pub pmi_percent: Decimal,
}

impl LoanScenario {
    /// Scenario pre-filled from the configured defaults
    pub fn from_defaults(defaults: &CalculatorDefaults) -> Self {
        Self {
            home_price: defaults.home_price,
            down_payment_percent: defaults.down_payment_percent,
            interest_rate_annual_percent: defaults.interest_rate_annual_percent,
            loan_term_years: i32::try_from(defaults.loan_term_years).unwrap_or(i32::MAX),
            property_tax_percent: Some(defaults.property_tax_percent),
            property_tax_annual_amount: None,
            monthly_home_insurance: defaults.monthly_home_insurance,
            monthly_hoa_fees: defaults.monthly_hoa_fees,
            pmi_percent: defaults.pmi_percent,
        }
    }

    /// Check every field against `bounds`, reporting all violations together
    pub fn validate(&self, bounds: &CalculatorBounds) -> Result<ValidatedLoanScenario, ValidationError> {
        let mut violations = Violations::default();

        let home_price = if violations.positive(ScenarioField::HomePrice, self.home_price)
            && violations.within(
                ScenarioField::HomePrice,
                self.home_price,
                bounds.home_price_min,
                bounds.home_price_max,
            ) {
            violations.convert(ScenarioField::HomePrice, HomePrice::try_new(self.home_price))
        } else {
            None
        };

        let down_payment = checked_percentage(
            &mut violations,
            ScenarioField::DownPaymentPercent,
            self.down_payment_percent,
            bounds.down_payment_min,
            bounds.down_payment_max,
        );

        let interest_rate = checked_rate(
            &mut violations,
            self.interest_rate_annual_percent,
            bounds,
        );

        let loan_term = checked_term(&mut violations, self.loan_term_years, bounds);

        let property_tax = match (self.property_tax_percent, self.property_tax_annual_amount) {
            (Some(percent), None) => checked_percentage(
                &mut violations,
                ScenarioField::PropertyTaxPercent,
                percent,
                Decimal::ZERO,
                limits::MAX_PERCENTAGE,
            )
            .map(PropertyTax::PercentOfPrice),
            (None, Some(amount)) => checked_amount(
                &mut violations,
                ScenarioField::PropertyTaxAnnualAmount,
                amount,
            )
            .map(PropertyTax::AnnualAmount),
            (Some(_), Some(_)) => {
                violations.push(
                    ScenarioField::PropertyTaxPercent,
                    ViolationReason::ConflictingPropertyTax,
                );
                violations.push(
                    ScenarioField::PropertyTaxAnnualAmount,
                    ViolationReason::ConflictingPropertyTax,
                );
                None
            }
            (None, None) => {
                violations.push(
                    ScenarioField::PropertyTaxPercent,
                    ViolationReason::MissingPropertyTax,
                );
                None
            }
        };

        let monthly_insurance = checked_amount(
            &mut violations,
            ScenarioField::MonthlyHomeInsurance,
            self.monthly_home_insurance,
        );
        let monthly_hoa = checked_amount(
            &mut violations,
            ScenarioField::MonthlyHoaFees,
            self.monthly_hoa_fees,
        );
        let pmi = checked_percentage(
            &mut violations,
            ScenarioField::PmiPercent,
            self.pmi_percent,
            bounds.pmi_min,
            bounds.pmi_max,
        );

        match (
            home_price,
            down_payment,
            interest_rate,
            loan_term,
            property_tax,
            monthly_insurance,
            monthly_hoa,
            pmi,
        ) {
            (
                Some(home_price),
                Some(down_payment),
                Some(interest_rate),
                Some(loan_term),
                Some(property_tax),
                Some(monthly_insurance),
                Some(monthly_hoa),
                Some(pmi),
            ) if violations.is_empty() => Ok(ValidatedLoanScenario {
                home_price,
                down_payment,
                interest_rate,
                loan_term,
                property_tax,
                monthly_insurance,
                monthly_hoa,
                pmi,
            }),
            _ => {
                let error = violations.into_error();
                debug!(fields = ?error.fields(), "Loan scenario rejected");
                Err(error)
            }
        }
    }
}

/// How property tax is expressed for a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyTax {
    /// Annual tax as a percentage of the home price
    PercentOfPrice(Percentage),
    /// Flat annual tax bill
    AnnualAmount(CurrencyAmount),
}

impl PropertyTax {
    /// Annual property tax owed on a home of the given price
    pub fn annual_amount(&self, home_price: HomePrice) -> Decimal {
        match self {
            PropertyTax::PercentOfPrice(percent) => percent.of(home_price.into_inner()),
            PropertyTax::AnnualAmount(amount) => amount.into_inner(),
        }
    }
}

/// A loan scenario whose every field is known to be in range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedLoanScenario {
    pub home_price: HomePrice,
    pub down_payment: Percentage,
    pub interest_rate: AnnualRatePercent,
    pub loan_term: LoanTermYears,
    pub property_tax: PropertyTax,
    pub monthly_insurance: CurrencyAmount,
    pub monthly_hoa: CurrencyAmount,
    pub pmi: Percentage,
}

impl ValidatedLoanScenario {
    pub fn down_payment_amount(&self) -> Decimal {
        self.down_payment.of(self.home_price.into_inner())
    }

    /// Amount financed: price minus down payment
    pub fn loan_amount(&self) -> Decimal {
        self.home_price.into_inner() - self.down_payment_amount()
    }

    pub fn requires_pmi(&self) -> bool {
        self.down_payment.into_inner() < mortgage::PMI_EXEMPT_DOWN_PAYMENT_PERCENT
    }
}

/// Affordability calculator input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityScenario {
    pub annual_income: Decimal,
    #[serde(default)]
    pub monthly_debt: Decimal,
    #[serde(default)]
    pub down_payment_amount: Decimal,
    pub interest_rate_annual_percent: Decimal,
    pub loan_term_years: i32,
    pub debt_to_income_ratio_percent: Decimal,
}

impl AffordabilityScenario {
    /// Scenario pre-filled from the configured defaults
    pub fn from_defaults(defaults: &CalculatorDefaults) -> Self {
        Self {
            annual_income: defaults.annual_income,
            monthly_debt: defaults.monthly_debt,
            down_payment_amount: defaults.down_payment_amount,
            interest_rate_annual_percent: defaults.interest_rate_annual_percent,
            loan_term_years: i32::try_from(defaults.loan_term_years).unwrap_or(i32::MAX),
            debt_to_income_ratio_percent: defaults.debt_to_income_ratio_percent,
        }
    }

    /// Check every field against `bounds`, reporting all violations together
    pub fn validate(
        &self,
        bounds: &CalculatorBounds,
    ) -> Result<ValidatedAffordabilityScenario, ValidationError> {
        let mut violations = Violations::default();

        let annual_income = if violations.positive(ScenarioField::AnnualIncome, self.annual_income)
        {
            violations.convert(
                ScenarioField::AnnualIncome,
                AnnualIncome::try_new(self.annual_income),
            )
        } else {
            None
        };
        let monthly_debt =
            checked_amount(&mut violations, ScenarioField::MonthlyDebt, self.monthly_debt);
        let down_payment = checked_amount(
            &mut violations,
            ScenarioField::DownPaymentAmount,
            self.down_payment_amount,
        );
        let interest_rate = checked_rate(
            &mut violations,
            self.interest_rate_annual_percent,
            bounds,
        );
        let loan_term = checked_term(&mut violations, self.loan_term_years, bounds);
        let dti_ratio = checked_percentage(
            &mut violations,
            ScenarioField::DebtToIncomeRatioPercent,
            self.debt_to_income_ratio_percent,
            bounds.dti_ratio_min,
            bounds.dti_ratio_max,
        );

        match (
            annual_income,
            monthly_debt,
            down_payment,
            interest_rate,
            loan_term,
            dti_ratio,
        ) {
            (
                Some(annual_income),
                Some(monthly_debt),
                Some(down_payment),
                Some(interest_rate),
                Some(loan_term),
                Some(dti_ratio),
            ) if violations.is_empty() => Ok(ValidatedAffordabilityScenario {
                annual_income,
                monthly_debt,
                down_payment,
                interest_rate,
                loan_term,
                dti_ratio,
            }),
            _ => {
                let error = violations.into_error();
                debug!(fields = ?error.fields(), "Affordability scenario rejected");
                Err(error)
            }
        }
    }
}

/// An affordability scenario whose every field is known to be in range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedAffordabilityScenario {
    pub annual_income: AnnualIncome,
    pub monthly_debt: CurrencyAmount,
    pub down_payment: CurrencyAmount,
    pub interest_rate: AnnualRatePercent,
    pub loan_term: LoanTermYears,
    pub dti_ratio: Percentage,
}

fn checked_percentage(
    violations: &mut Violations,
    field: ScenarioField,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Option<Percentage> {
    if violations.non_negative(field, value) && violations.within(field, value, min, max) {
        violations.convert(field, Percentage::try_new(value))
    } else {
        None
    }
}

fn checked_amount(
    violations: &mut Violations,
    field: ScenarioField,
    value: Decimal,
) -> Option<CurrencyAmount> {
    if violations.non_negative(field, value) {
        violations.convert(field, CurrencyAmount::try_new(value))
    } else {
        None
    }
}

fn checked_rate(
    violations: &mut Violations,
    value: Decimal,
    bounds: &CalculatorBounds,
) -> Option<AnnualRatePercent> {
    let field = ScenarioField::InterestRateAnnualPercent;
    if violations.non_negative(field, value)
        && violations.within(
            field,
            value,
            bounds.interest_rate_min,
            bounds.interest_rate_max,
        )
    {
        violations.convert(field, AnnualRatePercent::try_new(value))
    } else {
        None
    }
}

fn checked_term(
    violations: &mut Violations,
    value: i32,
    bounds: &CalculatorBounds,
) -> Option<LoanTermYears> {
    let field = ScenarioField::LoanTermYears;
    match u32::try_from(value) {
        Ok(years) if years > 0 => {
            if violations.one_of(field, years, &bounds.loan_term_options) {
                violations.convert(field, LoanTermYears::try_new(years))
            } else {
                None
            }
        }
        _ => {
            violations.push(field, ViolationReason::NotPositive);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldViolation;
    use rust_decimal_macros::dec;

    fn scenario() -> LoanScenario {
        LoanScenario {
            home_price: dec!(400000),
            down_payment_percent: dec!(20),
            interest_rate_annual_percent: dec!(6.5),
            loan_term_years: 30,
            property_tax_percent: Some(dec!(1.2)),
            property_tax_annual_amount: None,
            monthly_home_insurance: dec!(100),
            monthly_hoa_fees: dec!(0),
            pmi_percent: dec!(0.5),
        }
    }

    #[test]
    fn test_valid_scenario_passes() {
        let validated = scenario().validate(&CalculatorBounds::default()).unwrap();
        assert_eq!(validated.down_payment_amount(), dec!(80000));
        assert_eq!(validated.loan_amount(), dec!(320000));
        assert!(!validated.requires_pmi());
    }

    #[test]
    fn test_zero_price_and_negative_term_are_both_reported() {
        let bad = LoanScenario {
            home_price: Decimal::ZERO,
            loan_term_years: -5,
            ..scenario()
        };
        let error = bad.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.fields(),
            vec![ScenarioField::HomePrice, ScenarioField::LoanTermYears]
        );
    }

    #[test]
    fn test_term_outside_options_is_rejected() {
        let bad = LoanScenario {
            loan_term_years: 25,
            ..scenario()
        };
        let error = bad.validate(&CalculatorBounds::default()).unwrap_err();
        assert!(error.mentions(ScenarioField::LoanTermYears));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let bad = LoanScenario {
            interest_rate_annual_percent: dec!(-1),
            ..scenario()
        };
        let error = bad.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.violations()[0].reason,
            ViolationReason::Negative
        );
    }

    #[test]
    fn test_price_above_configured_maximum() {
        let bad = LoanScenario {
            home_price: dec!(9000000),
            ..scenario()
        };
        let error = bad.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.violations()[0].reason,
            ViolationReason::AboveMaximum {
                max: dec!(5000000)
            }
        );
    }

    #[test]
    fn test_property_tax_representations_are_exclusive() {
        let both = LoanScenario {
            property_tax_annual_amount: Some(dec!(4800)),
            ..scenario()
        };
        let error = both.validate(&CalculatorBounds::default()).unwrap_err();
        assert!(error.mentions(ScenarioField::PropertyTaxPercent));
        assert!(error.mentions(ScenarioField::PropertyTaxAnnualAmount));

        let neither = LoanScenario {
            property_tax_percent: None,
            ..scenario()
        };
        let error = neither.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.violations()[0].reason,
            ViolationReason::MissingPropertyTax
        );
    }

    #[test]
    fn test_flat_property_tax_amount() {
        let flat = LoanScenario {
            property_tax_percent: None,
            property_tax_annual_amount: Some(dec!(4800)),
            ..scenario()
        };
        let validated = flat.validate(&CalculatorBounds::default()).unwrap();
        assert_eq!(
            validated.property_tax.annual_amount(validated.home_price),
            dec!(4800)
        );
    }

    #[test]
    fn test_scenario_json_uses_camel_case() {
        let parsed: LoanScenario = serde_json::from_value(serde_json::json!({
            "homePrice": 350000,
            "downPaymentPercent": 10,
            "interestRateAnnualPercent": 7.25,
            "loanTermYears": 15,
            "propertyTaxAnnualAmount": 3600,
            "monthlyHomeInsurance": 90
        }))
        .unwrap();
        assert_eq!(parsed.interest_rate_annual_percent, dec!(7.25));
        assert_eq!(parsed.monthly_hoa_fees, Decimal::ZERO);
        assert_eq!(parsed.property_tax_percent, None);
    }

    #[test]
    fn test_defaults_produce_valid_scenarios() {
        let defaults = CalculatorDefaults::default();
        let bounds = CalculatorBounds::default();
        assert!(LoanScenario::from_defaults(&defaults).validate(&bounds).is_ok());
        assert!(AffordabilityScenario::from_defaults(&defaults)
            .validate(&bounds)
            .is_ok());
    }

    #[test]
    fn test_values_past_hard_limits_are_unsupported_under_unchecked_bounds() {
        let loose = CalculatorBounds {
            home_price_max: dec!(1000000000000),
            loan_term_options: vec![30, 60],
            ..CalculatorBounds::default()
        };
        let huge = LoanScenario {
            home_price: dec!(2000000000),
            loan_term_years: 60,
            ..scenario()
        };
        let error = huge.validate(&loose).unwrap_err();
        assert_eq!(
            error.violations(),
            &[
                FieldViolation {
                    field: ScenarioField::HomePrice,
                    reason: ViolationReason::Unsupported,
                },
                FieldViolation {
                    field: ScenarioField::LoanTermYears,
                    reason: ViolationReason::Unsupported,
                },
            ]
        );
    }

    #[test]
    fn test_income_past_hard_limit_is_unsupported() {
        let rich = AffordabilityScenario {
            annual_income: dec!(5000000000),
            ..AffordabilityScenario::from_defaults(&CalculatorDefaults::default())
        };
        let error = rich.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.violations()[0],
            FieldViolation {
                field: ScenarioField::AnnualIncome,
                reason: ViolationReason::Unsupported,
            }
        );
    }

    #[test]
    fn test_affordability_collects_all_violations() {
        let bad = AffordabilityScenario {
            annual_income: dec!(-1),
            monthly_debt: dec!(-10),
            down_payment_amount: dec!(0),
            interest_rate_annual_percent: dec!(6),
            loan_term_years: 0,
            debt_to_income_ratio_percent: dec!(60),
        };
        let error = bad.validate(&CalculatorBounds::default()).unwrap_err();
        assert_eq!(
            error.fields(),
            vec![
                ScenarioField::AnnualIncome,
                ScenarioField::MonthlyDebt,
                ScenarioField::LoanTermYears,
                ScenarioField::DebtToIncomeRatioPercent,
            ]
        );
    }
}
