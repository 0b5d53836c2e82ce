//! Year-by-year amortization schedule

use super::amortization::level_payment;
use crate::domain::bounds::CalculatorBounds;
use crate::domain::currency::round_to_whole_units;
use crate::domain::scenario::LoanScenario;
use crate::domain::types::{AnnualRatePercent, LoanAmount, LoanTermYears};
use crate::domain::validation::ValidationError;
use crate::domain::validation_constants::mortgage;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Principal and interest paid during one loan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationYear {
    pub year: u32,
    pub principal_paid: Decimal,
    pub interest_paid: Decimal,
    pub ending_balance: Decimal,
}

impl AmortizationYear {
    /// Copy with every figure rounded to whole currency units for display
    pub fn rounded(&self) -> Self {
        Self {
            year: self.year,
            principal_paid: round_to_whole_units(self.principal_paid),
            interest_paid: round_to_whole_units(self.interest_paid),
            ending_balance: round_to_whole_units(self.ending_balance),
        }
    }
}

/// Amortize `loan` month by month and summarize each year
///
/// The final payment absorbs any residue so the last ending balance is
/// exactly zero and principal paid sums to the loan amount.
pub fn amortization_schedule(
    loan: LoanAmount,
    rate: AnnualRatePercent,
    term: LoanTermYears,
) -> Vec<AmortizationYear> {
    schedule_for(loan.into_inner(), rate, term)
}

/// Validate `scenario` against `bounds` and amortize its financed amount
#[instrument(level = "debug", skip_all)]
pub fn compute_amortization_schedule(
    scenario: &LoanScenario,
    bounds: &CalculatorBounds,
) -> Result<Vec<AmortizationYear>, ValidationError> {
    let validated = scenario.validate(bounds)?;
    Ok(schedule_for(
        validated.loan_amount(),
        validated.interest_rate,
        validated.loan_term,
    ))
}

fn schedule_for(
    principal: Decimal,
    rate: AnnualRatePercent,
    term: LoanTermYears,
) -> Vec<AmortizationYear> {
    let payment = level_payment(principal, rate, term);
    let monthly_rate = rate.monthly_rate();
    let years = term.into_inner();
    let mut balance = principal;
    let mut schedule = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let mut principal_paid = Decimal::ZERO;
        let mut interest_paid = Decimal::ZERO;

        for month in 1..=mortgage::MONTHS_PER_YEAR {
            let interest = balance * monthly_rate;
            let is_final_payment = year == years && month == mortgage::MONTHS_PER_YEAR;
            let principal_part = if is_final_payment {
                balance
            } else {
                (payment - interest).min(balance)
            };

            interest_paid += interest;
            principal_paid += principal_part;
            balance -= principal_part;
        }

        schedule.push(AmortizationYear {
            year,
            principal_paid,
            interest_paid,
            ending_balance: balance,
        });
    }

    schedule
}
