//! Mortgage calculation engine
//!
//! Every calculator screen goes through these functions; none of them
//! re-implements the amortization formula. All functions are pure and
//! synchronous, and no rounding happens between steps.

pub mod affordability;
pub mod amortization;
pub mod payment;
pub mod schedule;

pub use affordability::{compute_affordability, AffordabilityResult};
pub use amortization::compute_monthly_payment;
pub use payment::{compute_payment_breakdown, PaymentBreakdown};
pub use schedule::{amortization_schedule, compute_amortization_schedule, AmortizationYear};
