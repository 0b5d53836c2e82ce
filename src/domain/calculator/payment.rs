//! Monthly payment breakdown for a home purchase

use super::amortization::level_payment;
use crate::domain::bounds::CalculatorBounds;
use crate::domain::currency::round_to_whole_units;
use crate::domain::scenario::{LoanScenario, ValidatedLoanScenario};
use crate::domain::validation::ValidationError;
use crate::domain::validation_constants::mortgage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything a buyer pays each month, plus totals over the loan term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub down_payment_amount: Decimal,
    pub loan_amount: Decimal,
    pub monthly_principal_and_interest: Decimal,
    pub monthly_property_tax: Decimal,
    /// Zero when the down payment is at least 20%
    pub monthly_pmi: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_hoa: Decimal,
    pub total_monthly_payment: Decimal,
    pub total_interest_over_term: Decimal,
    pub total_cost_over_term: Decimal,
}

impl PaymentBreakdown {
    /// Copy with every figure rounded to whole currency units for display
    pub fn rounded(&self) -> Self {
        Self {
            down_payment_amount: round_to_whole_units(self.down_payment_amount),
            loan_amount: round_to_whole_units(self.loan_amount),
            monthly_principal_and_interest: round_to_whole_units(
                self.monthly_principal_and_interest,
            ),
            monthly_property_tax: round_to_whole_units(self.monthly_property_tax),
            monthly_pmi: round_to_whole_units(self.monthly_pmi),
            monthly_insurance: round_to_whole_units(self.monthly_insurance),
            monthly_hoa: round_to_whole_units(self.monthly_hoa),
            total_monthly_payment: round_to_whole_units(self.total_monthly_payment),
            total_interest_over_term: round_to_whole_units(self.total_interest_over_term),
            total_cost_over_term: round_to_whole_units(self.total_cost_over_term),
        }
    }
}

/// Validate `scenario` against `bounds` and break down its monthly cost
#[instrument(level = "debug", skip_all)]
pub fn compute_payment_breakdown(
    scenario: &LoanScenario,
    bounds: &CalculatorBounds,
) -> Result<PaymentBreakdown, ValidationError> {
    let validated = scenario.validate(bounds)?;
    let breakdown = breakdown_for(&validated);
    debug!(
        loan_amount = %breakdown.loan_amount,
        total_monthly_payment = %breakdown.total_monthly_payment,
        "Computed payment breakdown"
    );
    Ok(breakdown)
}

fn breakdown_for(scenario: &ValidatedLoanScenario) -> PaymentBreakdown {
    let months_per_year = Decimal::from(mortgage::MONTHS_PER_YEAR);
    let down_payment_amount = scenario.down_payment_amount();
    let loan_amount = scenario.loan_amount();

    let monthly_principal_and_interest =
        level_payment(loan_amount, scenario.interest_rate, scenario.loan_term);
    let monthly_property_tax =
        scenario.property_tax.annual_amount(scenario.home_price) / months_per_year;
    let monthly_pmi = if scenario.requires_pmi() {
        scenario.pmi.of(loan_amount) / months_per_year
    } else {
        Decimal::ZERO
    };
    let monthly_insurance = scenario.monthly_insurance.into_inner();
    let monthly_hoa = scenario.monthly_hoa.into_inner();

    let total_monthly_payment = monthly_principal_and_interest
        + monthly_property_tax
        + monthly_pmi
        + monthly_insurance
        + monthly_hoa;
    let total_cost_over_term =
        monthly_principal_and_interest * Decimal::from(scenario.loan_term.months());
    let total_interest_over_term = total_cost_over_term - loan_amount;

    PaymentBreakdown {
        down_payment_amount,
        loan_amount,
        monthly_principal_and_interest,
        monthly_property_tax,
        monthly_pmi,
        monthly_insurance,
        monthly_hoa,
        total_monthly_payment,
        total_interest_over_term,
        total_cost_over_term,
    }
}
