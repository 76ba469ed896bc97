use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Shipment synchronization failed"))]
    #[snafu(context(false))]
    Bridge {
        #[snafu(implicit)]
        location: Location,
        source: fleet_core::Error,
    },
    #[snafu(display("Failed to load configuration"))]
    #[snafu(context(false))]
    Config {
        #[snafu(implicit)]
        location: Location,
        source: config::ConfigError,
    },
    #[snafu(display("Invalid APP_ENVIRONMENT '{value}'"))]
    InvalidEnvironment {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

impl Error {
    /// Whether the failure came from the remote store rather than from local validation.
    pub fn is_sync(&self) -> bool {
        matches!(self, Error::Bridge { source, .. } if source.is_sync())
    }
}
