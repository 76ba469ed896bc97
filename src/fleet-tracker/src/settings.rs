use std::time::Duration;

use config::{Config, File};
use fleet_core::Viewport;
use serde::Deserialize;
use snafu::OptionExt;

use crate::error::{Result, error::InvalidEnvironmentSnafu};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub log_level: LogLevel,
    pub environment: Environment,
    /// Undelivered snapshots kept per subscriber before the oldest is dropped.
    pub snapshot_buffer_size: usize,
    /// Pause after applying a snapshot, snapshots arriving meanwhile are coalesced.
    #[serde(with = "humantime_serde")]
    pub sync_interval: Duration,
    pub seed_demo_data: bool,
    pub initial_viewport: Option<Viewport>,
}

impl Settings {
    pub fn new() -> Result<Settings> {
        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(value) => value
                .parse::<Environment>()
                .ok()
                .context(InvalidEnvironmentSnafu { value })?,
            Err(_) => Environment::Local,
        };

        let settings = Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.as_str().to_lowercase()))
                    .required(true),
            )
            .add_source(config::Environment::with_prefix("FLEET_TRACKER").separator("__"))
            .set_override("environment", environment.as_str())?
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
