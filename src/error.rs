use crate::domain::bounds::BoundsError;
use thiserror::Error;

/// Mortgage Desk application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid calculator bounds: {0}")]
    Bounds(#[from] BoundsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
