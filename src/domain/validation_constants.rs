//! Validation constants for domain types
//!
//! This module centralizes the limits and fixed domain constants used by
//! the calculation engine so they are defined in exactly one place.

/// Hard representability ceilings for calculator inputs
///
/// These sit well above anything a settings source would configure and keep
/// every `Decimal` intermediate of the amortization math far from overflow.
pub mod limits {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Largest currency amount accepted anywhere (one billion)
    pub const MAX_CURRENCY_AMOUNT: Decimal = dec!(1000000000);

    /// Upper bound for any percentage input
    pub const MAX_PERCENTAGE: Decimal = dec!(100);

    /// Upper bound for an annual interest rate, in percent
    pub const MAX_ANNUAL_RATE_PERCENT: Decimal = dec!(100);

    /// Longest supported loan term in years
    pub const MAX_LOAN_TERM_YEARS: u32 = 50;
}

/// Fixed mortgage domain constants
pub mod mortgage {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Down payment percentage at or above which no PMI is charged
    pub const PMI_EXEMPT_DOWN_PAYMENT_PERCENT: Decimal = dec!(20);

    /// Payment periods per year
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Divisor converting a percentage into a fraction
    pub const PERCENT_DIVISOR: Decimal = dec!(100);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limits_are_reasonable() {
        assert_eq!(limits::MAX_CURRENCY_AMOUNT, dec!(1000000000));
        assert_eq!(limits::MAX_PERCENTAGE, dec!(100));
        assert_eq!(limits::MAX_LOAN_TERM_YEARS, 50);
    }

    #[test]
    fn test_pmi_threshold_is_twenty_percent() {
        assert_eq!(mortgage::PMI_EXEMPT_DOWN_PAYMENT_PERCENT, dec!(20));
        assert_eq!(mortgage::MONTHS_PER_YEAR, 12);
    }
}
