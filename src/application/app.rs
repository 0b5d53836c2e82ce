use crate::application::http;
use crate::config::Settings;
use crate::infrastructure::log_messages::application;
use crate::infrastructure::InMemorySettingsProvider;
use crate::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    provider: Arc<InMemorySettingsProvider>,
}

impl Application {
    /// Load settings from the environment and build the application
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Self::with_settings(settings)
    }

    /// Build the application from already-loaded settings
    pub fn with_settings(settings: Settings) -> Result<Self> {
        let provider = Arc::new(InMemorySettingsProvider::new(
            settings.calculator.clone(),
        )?);
        Ok(Self { settings, provider })
    }

    /// Calculator router backed by this application's settings
    pub fn router(&self) -> axum::Router {
        http::router(self.provider.clone())
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let address = self.settings.bind_address();
        let listener = TcpListener::bind(&address).await?;
        info!(
            address = %address,
            environment = %self.settings.application.environment,
            "{}",
            application::STARTED_SUCCESSFULLY
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("{}", application::STOPPED);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("{}", application::SHUTDOWN_SIGNAL),
        Err(e) => error!(error = %e, "{}", application::SHUTDOWN_SIGNAL_FAILED),
    }
}
