use anyhow::Result;
use mortgage_desk::config::{LoggingSettings, Settings};
use mortgage_desk::domain::config_types::LogFormat;
use mortgage_desk::infrastructure::log_messages::application;
use mortgage_desk::Application;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    info!("{}", application::STARTING);

    let app = Application::with_settings(settings)?;
    app.run().await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured level when set
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
