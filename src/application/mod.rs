//! Application services and the calculator API
//!
//! This module wires the settings provider and the calculation engine into
//! an HTTP service and owns its lifecycle.

pub mod app;
pub mod error_response;
pub mod http;

pub use app::Application;
