//! Listener and logging settings
//!
//! Deserialized once at startup by `config::Settings`; malformed values fail
//! configuration loading instead of surfacing later.

use nutype::nutype;
use serde::Deserialize;

/// Interface the calculator API binds to, e.g. `0.0.0.0` or `localhost`
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 253),
    derive(Debug, Clone, PartialEq, Eq, Deserialize, AsRef, Display)
)]
pub struct Host(String);

/// TCP port of the calculator API
#[nutype(
    validate(greater = 0),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, AsRef, Display)
)]
pub struct Port(u16);

/// Verbosity used when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output style of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, for log shipping
    Json,
    Pretty,
    Compact,
}
