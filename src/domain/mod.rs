//! Domain types and business logic for Mortgage Desk
//!
//! This module contains the calculator inputs, the validated quantities they
//! are checked into, and the pure calculation engine built on them.

pub mod bounds;
pub mod calculator;
pub mod config_types;
pub mod currency;
pub mod scenario;
pub mod types;
pub mod validation;
pub mod validation_constants;

pub use bounds::*;
pub use calculator::*;
pub use scenario::*;
pub use validation::{FieldViolation, ScenarioField, ValidationError, ViolationReason};
