//! Presentation-boundary rounding and formatting
//!
//! The engine computes at full precision; these helpers are applied only when
//! a figure leaves for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole currency units, halves away from zero
pub fn round_to_whole_units(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as whole dollars with thousands separators, e.g. `$1,896`
pub fn format_whole_currency(value: Decimal) -> String {
    let rounded = round_to_whole_units(value);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < Decimal::ZERO {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
