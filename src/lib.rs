//! Mortgage Desk - mortgage payment and affordability calculators
//!
//! A single pure calculation engine serves every calculator screen of a
//! real-estate site, with bounds and defaults supplied by a read-only
//! settings provider and a small JSON API in front of it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
