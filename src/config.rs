use crate::domain::bounds::CalculatorSettings;
use crate::domain::config_types::{Host, LogFormat, LogLevel, Port};
use crate::infrastructure::log_messages::configuration;
use crate::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub calculator: CalculatorSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: Host,
    pub port: Port,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Settings {
    /// Load settings from defaults, optional `config/` files and
    /// `MORTGAGE_DESK__*` environment variables, in increasing priority.
    ///
    /// Calculator bounds are checked before the settings are returned.
    pub fn new() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        debug!(environment = %environment, "{}", configuration::LOADING_CONFIG);

        let config = Config::builder()
            // Start with default values
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("application.environment", environment.clone())?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("MORTGAGE_DESK").separator("__"))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        settings.calculator.bounds.validate()?;
        debug!("{}", configuration::CONFIG_LOADED);
        Ok(settings)
    }

    /// Socket address string the API listens on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}
