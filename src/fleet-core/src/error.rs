use snafu::{Location, Snafu};

use crate::VesselId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ValidationError {
    #[snafu(display("Shipment record is missing required field '{field}'"))]
    MissingField {
        #[snafu(implicit)]
        location: Location,
        field: &'static str,
    },
    #[snafu(display("Field '{field}' has out of range value '{value}'"))]
    OutOfRange {
        #[snafu(implicit)]
        location: Location,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Shipment record '{id}' failed validation"))]
    Validation {
        #[snafu(implicit)]
        location: Location,
        id: VesselId,
        source: ValidationError,
    },
    #[snafu(display("Shipment '{id}' does not exist"))]
    NotFound {
        #[snafu(implicit)]
        location: Location,
        id: VesselId,
    },
    #[snafu(display("Remote synchronization failed: '{message}'"))]
    Sync {
        #[snafu(implicit)]
        location: Location,
        message: String,
    },
    #[snafu(display("Snapshot subscription closed"))]
    SubscriptionClosed {
        #[snafu(implicit)]
        location: Location,
    },
}

impl Error {
    pub fn is_sync(&self) -> bool {
        matches!(
            self,
            Error::Sync { .. } | Error::SubscriptionClosed { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), display("Invalid eta delta '{value}'"))]
pub struct ParseEtaDeltaError {
    #[snafu(implicit)]
    location: Location,
    value: String,
}
