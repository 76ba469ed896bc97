use chrono::{DateTime, Utc};
use snafu::ResultExt;
use tracing::{debug, instrument, warn};

use crate::{Error, ShipmentRecord, Vessel, error::error::ValidationSnafu};

/// Result of mapping a remote snapshot into vessels.
#[derive(Debug, Default)]
pub struct Admission {
    /// Admitted vessels in snapshot order.
    pub vessels: Vec<Vessel>,
    pub rejected: Vec<Error>,
}

/// Maps every record of a snapshot, rejecting the ones that fail validation without affecting
/// the rest of the snapshot.
#[instrument(skip_all, fields(records = records.len()))]
pub fn admit_snapshot(records: &[ShipmentRecord], now: DateTime<Utc>) -> Admission {
    let mut admission = Admission {
        vessels: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };

    for r in records {
        match r.to_vessel(now).context(ValidationSnafu { id: r.id.clone() }) {
            Ok(v) => admission.vessels.push(v),
            Err(e) => {
                warn!("rejected shipment record: {e:?}");
                admission.rejected.push(e);
            }
        }
    }

    debug!(
        "admitted {} vessels, rejected {} records",
        admission.vessels.len(),
        admission.rejected.len()
    );

    admission
}
