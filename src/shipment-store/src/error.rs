use fleet_core::{ValidationError, VesselId};
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Shipment store is offline"))]
    Offline {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Shipment store state was poisoned by a panicking writer"))]
    LockPoisoned {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Shipment '{id}' does not exist"))]
    NotFound {
        #[snafu(implicit)]
        location: Location,
        id: VesselId,
    },
    #[snafu(display("Shipment '{id}' failed validation"))]
    Validation {
        #[snafu(implicit)]
        location: Location,
        id: VesselId,
        source: ValidationError,
    },
}

impl From<Error> for fleet_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        match value {
            Error::Offline { .. } | Error::LockPoisoned { .. } => fleet_core::Error::Sync {
                location,
                message: value.to_string(),
            },
            Error::NotFound { id, .. } => fleet_core::Error::NotFound { location, id },
            Error::Validation { id, source, .. } => fleet_core::Error::Validation {
                location,
                id,
                source,
            },
        }
    }
}
