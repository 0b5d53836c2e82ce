//! Fixed-rate amortization formula

use crate::domain::types::{AnnualRatePercent, LoanAmount, LoanTermYears};
use rust_decimal::{Decimal, MathematicalOps};

/// Level monthly payment that repays `loan` over `term` at `rate`
///
/// ```text
/// r = rate / 100 / 12, n = term * 12
/// payment = loan / n                              when r == 0
///         = loan * r * (1+r)^n / ((1+r)^n - 1)    otherwise
/// ```
///
/// The result is never negative and grows with both loan and rate.
pub fn compute_monthly_payment(
    loan: LoanAmount,
    rate: AnnualRatePercent,
    term: LoanTermYears,
) -> Decimal {
    level_payment(loan.into_inner(), rate, term)
}

/// Payment for an already-validated principal
pub(crate) fn level_payment(
    principal: Decimal,
    rate: AnnualRatePercent,
    term: LoanTermYears,
) -> Decimal {
    let months = Decimal::from(term.months());
    match growth_factor(rate, term) {
        Some((r, growth)) => principal * (r * growth / (growth - Decimal::ONE)),
        None => principal / months,
    }
}

/// Largest principal that a given monthly payment can repay
///
/// Inverse of [`level_payment`].
pub(crate) fn principal_for_payment(
    payment: Decimal,
    rate: AnnualRatePercent,
    term: LoanTermYears,
) -> Decimal {
    let months = Decimal::from(term.months());
    match growth_factor(rate, term) {
        Some((r, growth)) => payment * ((growth - Decimal::ONE) / (r * growth)),
        None => payment * months,
    }
}

/// Monthly rate `r` and `(1 + r)^n`, or `None` when the loan amortizes
/// like a zero-rate loan.
///
/// Rates too small to move `(1 + r)^n` off one within 28 significant digits
/// are treated as zero so the formula never divides by zero.
fn growth_factor(rate: AnnualRatePercent, term: LoanTermYears) -> Option<(Decimal, Decimal)> {
    let r = rate.monthly_rate();
    if r.is_zero() {
        return None;
    }
    let growth = (Decimal::ONE + r).powu(u64::from(term.months()));
    if growth <= Decimal::ONE {
        return None;
    }
    Some((r, growth))
}
