//! Infrastructure layer for Mortgage Desk
//!
//! This module contains the implementations for external concerns: the
//! settings source the calculators read their bounds from, and the shared
//! log message catalogue.

pub mod log_messages;
pub mod settings_provider;

pub use settings_provider::*;
