//! Read-only source of calculator bounds and defaults
//!
//! The calculation engine never reads settings itself; callers fetch the
//! immutable `CalculatorSettings` from a provider and pass the bounds in.

use crate::domain::bounds::{BoundsError, CalculatorBounds, CalculatorSettings};
use crate::infrastructure::log_messages::configuration;
use tracing::info;

/// Supplies the calculator settings singleton
pub trait SettingsProvider: Send + Sync {
    fn calculator_settings(&self) -> &CalculatorSettings;

    fn bounds(&self) -> &CalculatorBounds {
        &self.calculator_settings().bounds
    }
}

/// Settings held in memory for the life of the process
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsProvider {
    settings: CalculatorSettings,
}

impl InMemorySettingsProvider {
    /// Wrap `settings`, rejecting bounds that could not validate any input
    pub fn new(settings: CalculatorSettings) -> Result<Self, BoundsError> {
        settings.bounds.validate()?;
        info!(
            loan_term_options = ?settings.bounds.loan_term_options,
            "{}",
            configuration::SETTINGS_PROVIDER_READY
        );
        Ok(Self { settings })
    }
}

impl SettingsProvider for InMemorySettingsProvider {
    fn calculator_settings(&self) -> &CalculatorSettings {
        &self.settings
    }
}
