//! Log message constants for infrastructure components
//!
//! This module centralizes log messages used outside the calculation engine
//! to keep wording consistent across the application and API layers.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting Mortgage Desk application";
    pub const STARTED_SUCCESSFULLY: &str = "Calculator API listening";
    pub const SHUTDOWN_SIGNAL: &str = "Shutdown signal received, draining connections";
    pub const SHUTDOWN_SIGNAL_FAILED: &str = "Failed to install shutdown signal handler";
    pub const STOPPED: &str = "Calculator API stopped";
}

/// Calculator API messages
pub mod api {
    pub const SCENARIO_REJECTED: &str = "Calculator scenario rejected";
    pub const BODY_REJECTED: &str = "Calculator request body rejected";
    pub const ROUTES_CONFIGURED: &str = "Calculator routes configured";
}

/// Configuration and settings messages
pub mod configuration {
    pub const LOADING_CONFIG: &str = "Loading configuration";
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
    pub const SETTINGS_PROVIDER_READY: &str = "Calculator settings provider ready";
}
