//! How much house an income supports

use super::amortization::principal_for_payment;
use crate::domain::bounds::CalculatorBounds;
use crate::domain::currency::round_to_whole_units;
use crate::domain::scenario::{AffordabilityScenario, ValidatedAffordabilityScenario};
use crate::domain::validation::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Affordability ceiling derived from income, debts and the DTI limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResult {
    pub max_monthly_payment: Decimal,
    pub max_loan_amount: Decimal,
    pub max_home_price: Decimal,
}

impl AffordabilityResult {
    /// Outcome when existing debt already uses up the allowed share of income
    fn zero(down_payment: Decimal) -> Self {
        Self {
            max_monthly_payment: Decimal::ZERO,
            max_loan_amount: Decimal::ZERO,
            max_home_price: down_payment,
        }
    }

    /// Copy with every figure rounded to whole currency units for display
    pub fn rounded(&self) -> Self {
        Self {
            max_monthly_payment: round_to_whole_units(self.max_monthly_payment),
            max_loan_amount: round_to_whole_units(self.max_loan_amount),
            max_home_price: round_to_whole_units(self.max_home_price),
        }
    }
}

/// Validate `scenario` against `bounds` and compute the affordable price
///
/// Debt beyond the DTI allowance is a zero-affordability outcome, not an error.
#[instrument(level = "debug", skip_all)]
pub fn compute_affordability(
    scenario: &AffordabilityScenario,
    bounds: &CalculatorBounds,
) -> Result<AffordabilityResult, ValidationError> {
    let validated = scenario.validate(bounds)?;
    let result = affordability_for(&validated);
    debug!(
        max_home_price = %result.max_home_price,
        "Computed affordability"
    );
    Ok(result)
}

fn affordability_for(scenario: &ValidatedAffordabilityScenario) -> AffordabilityResult {
    let down_payment = scenario.down_payment.into_inner();
    let max_monthly_payment = scenario.dti_ratio.of(scenario.annual_income.monthly())
        - scenario.monthly_debt.into_inner();

    if max_monthly_payment <= Decimal::ZERO {
        debug!("Monthly debt exceeds the allowed share of income");
        return AffordabilityResult::zero(down_payment);
    }

    let max_loan_amount =
        principal_for_payment(max_monthly_payment, scenario.interest_rate, scenario.loan_term);

    AffordabilityResult {
        max_monthly_payment,
        max_loan_amount,
        max_home_price: max_loan_amount + down_payment,
    }
}
