use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use snafu::ensure;
use tracing::warn;

use crate::{
    CargoInfo, Coordinates, EtaDelta, EventStatus, PathGenerator, PortCall, Progress, RiskEvent,
    RiskScore, ValidationError, Vessel, VesselId, VesselStatus, VoyageStatus, defaults::RecordSeed,
    find_port,
    validation_error::{MissingFieldSnafu, OutOfRangeSnafu},
};

pub const DEFAULT_POL_POSITION: Coordinates = Coordinates::new(103.84, 1.264);
pub const DEFAULT_POD_POSITION: Coordinates = Coordinates::new(114.3, 22.575);
pub const DEFAULT_RISK_SCORE: u8 = 12;
pub const DEFAULT_SPEED_KNOTS: f64 = 14.0;
pub const DEFAULT_PROGRESS_PERCENT: f64 = 45.0;

const DEFAULT_TRANSIT_DAYS: i64 = 10;
const DEFAULT_DEPARTURE_AGE_DAYS: i64 = 5;
const SECONDS_PER_DAY: i64 = 86_400;

/// Coarse risk classification persisted alongside a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    Safe,
    Warning,
    Critical,
}

/// The persisted, user editable fields of a shipment.
///
/// Timestamps are kept as the raw strings the remote store holds, they are parsed leniently
/// when mapped into a [Vessel].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentFields {
    #[serde(default)]
    pub vessel_name: String,
    pub imo: Option<String>,
    pub container_id: Option<String>,
    #[serde(default)]
    pub pol_code: String,
    #[serde(default)]
    pub pod_code: String,
    pub pol_lat: Option<f64>,
    pub pol_lon: Option<f64>,
    pub pod_lat: Option<f64>,
    pub pod_lon: Option<f64>,
    pub carrier_eta: Option<String>,
    pub predicted_eta: Option<String>,
    pub eta_delta: Option<String>,
    pub status: Option<ShipmentStatus>,
    pub risk_score: Option<i64>,
    pub voyage_status: Option<VoyageStatus>,
    pub speed: Option<f64>,
    pub progress: Option<f64>,
    pub days_to_arrival: Option<i64>,
    pub last_update: Option<String>,
}

/// Input of a remote `create` call.
pub type NewShipment = ShipmentFields;

/// A shipment as delivered by a remote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: VesselId,
    #[serde(flatten)]
    pub fields: ShipmentFields,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields to merge into an existing shipment, `None` leaves the stored value untouched.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPatch {
    pub vessel_name: Option<String>,
    pub imo: Option<String>,
    pub container_id: Option<String>,
    pub pol_code: Option<String>,
    pub pod_code: Option<String>,
    pub pol_lat: Option<f64>,
    pub pol_lon: Option<f64>,
    pub pod_lat: Option<f64>,
    pub pod_lon: Option<f64>,
    pub carrier_eta: Option<String>,
    pub predicted_eta: Option<String>,
    pub eta_delta: Option<String>,
    pub status: Option<ShipmentStatus>,
    pub risk_score: Option<i64>,
    pub voyage_status: Option<VoyageStatus>,
    pub speed: Option<f64>,
    pub progress: Option<f64>,
    pub days_to_arrival: Option<i64>,
    pub last_update: Option<String>,
}

impl ShipmentPatch {
    pub fn apply(self, fields: &mut ShipmentFields) {
        let ShipmentPatch {
            vessel_name,
            imo,
            container_id,
            pol_code,
            pod_code,
            pol_lat,
            pol_lon,
            pod_lat,
            pod_lon,
            carrier_eta,
            predicted_eta,
            eta_delta,
            status,
            risk_score,
            voyage_status,
            speed,
            progress,
            days_to_arrival,
            last_update,
        } = self;

        if let Some(v) = vessel_name {
            fields.vessel_name = v;
        }
        if let Some(v) = pol_code {
            fields.pol_code = v;
        }
        if let Some(v) = pod_code {
            fields.pod_code = v;
        }

        fields.imo = imo.or(fields.imo.take());
        fields.container_id = container_id.or(fields.container_id.take());
        fields.pol_lat = pol_lat.or(fields.pol_lat);
        fields.pol_lon = pol_lon.or(fields.pol_lon);
        fields.pod_lat = pod_lat.or(fields.pod_lat);
        fields.pod_lon = pod_lon.or(fields.pod_lon);
        fields.carrier_eta = carrier_eta.or(fields.carrier_eta.take());
        fields.predicted_eta = predicted_eta.or(fields.predicted_eta.take());
        fields.eta_delta = eta_delta.or(fields.eta_delta.take());
        fields.status = status.or(fields.status);
        fields.risk_score = risk_score.or(fields.risk_score);
        fields.voyage_status = voyage_status.or(fields.voyage_status);
        fields.speed = speed.or(fields.speed);
        fields.progress = progress.or(fields.progress);
        fields.days_to_arrival = days_to_arrival.or(fields.days_to_arrival);
        fields.last_update = last_update.or(fields.last_update.take());
    }
}

impl ShipmentFields {
    /// Checks the required fields and the ranges of the optional ones.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure!(
            !self.vessel_name.trim().is_empty(),
            MissingFieldSnafu {
                field: "vesselName"
            }
        );
        ensure!(
            !self.pol_code.trim().is_empty(),
            MissingFieldSnafu { field: "polCode" }
        );
        ensure!(
            !self.pod_code.trim().is_empty(),
            MissingFieldSnafu { field: "podCode" }
        );

        if let Some(v) = self.risk_score {
            RiskScore::try_from(v)?;
        }
        if let Some(v) = self.progress {
            Progress::try_from(v)?;
        }
        if let Some(v) = self.days_to_arrival {
            ensure!(
                (0..=u32::MAX as i64).contains(&v),
                OutOfRangeSnafu {
                    field: "daysToArrival",
                    value: v as f64,
                }
            );
        }
        if let Some(v) = self.speed {
            ensure!(
                v.is_finite() && v >= 0.0,
                OutOfRangeSnafu {
                    field: "speed",
                    value: v,
                }
            );
        }

        for (field, value, limit) in [
            ("polLat", self.pol_lat, 90.0),
            ("podLat", self.pod_lat, 90.0),
            ("polLon", self.pol_lon, 180.0),
            ("podLon", self.pod_lon, 180.0),
        ] {
            if let Some(value) = value {
                ensure!(
                    (-limit..=limit).contains(&value),
                    OutOfRangeSnafu { field, value }
                );
            }
        }

        Ok(())
    }

    /// Fills the values the remote store assigns to fields a new shipment leaves empty.
    pub fn with_server_defaults(mut self) -> ShipmentFields {
        self.status.get_or_insert(ShipmentStatus::Safe);
        self.risk_score.get_or_insert(DEFAULT_RISK_SCORE as i64);
        self.voyage_status.get_or_insert(VoyageStatus::OnTime);
        self
    }
}

impl ShipmentRecord {
    /// Maps the record into a [Vessel], filling every missing optional field with a default.
    ///
    /// The mapping is a pure function of the record and `now`: placeholder identifiers and
    /// cargo details are derived from the record id, geometry from the port positions and the
    /// progress.
    pub fn to_vessel(&self, now: DateTime<Utc>) -> Result<Vessel, ValidationError> {
        let fields = &self.fields;
        fields.validate()?;

        let seed = RecordSeed::new(self.id.as_str());

        let pol = port_call(
            &fields.pol_code,
            fields.pol_lat,
            fields.pol_lon,
            DEFAULT_POL_POSITION,
        );
        let pod = port_call(
            &fields.pod_code,
            fields.pod_lat,
            fields.pod_lon,
            DEFAULT_POD_POSITION,
        );

        let risk_score =
            RiskScore::try_from(fields.risk_score.unwrap_or(DEFAULT_RISK_SCORE as i64))?;
        let progress = Progress::try_from(fields.progress.unwrap_or(DEFAULT_PROGRESS_PERCENT))?;

        let generator = PathGenerator::default();
        let path = generator.generate_partial(pol.position, pod.position, progress.fraction());
        let position = path.last().copied().unwrap_or(pol.position);
        let predicted_path = generator.generate(position, pod.position);

        let predicted_eta = parse_timestamp("predictedEta", fields.predicted_eta.as_deref());
        let carrier_eta = parse_timestamp("carrierEta", fields.carrier_eta.as_deref());
        let eta = predicted_eta
            .or(carrier_eta)
            .unwrap_or_else(|| now + Duration::days(DEFAULT_TRANSIT_DAYS));
        let original_eta = carrier_eta.unwrap_or(eta);

        let eta_delta = fields
            .eta_delta
            .as_deref()
            .and_then(|v| match v.parse::<EtaDelta>() {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("invalid eta delta on shipment '{}': {e:?}", self.id);
                    None
                }
            })
            .unwrap_or_else(|| EtaDelta::between(original_eta, eta));

        let days_to_arrival = match fields.days_to_arrival {
            Some(v) => u32::try_from(v).map_err(|_| {
                OutOfRangeSnafu {
                    field: "daysToArrival",
                    value: v as f64,
                }
                .build()
            })?,
            None => days_until(now, eta),
        };

        let last_update = parse_timestamp("lastUpdate", fields.last_update.as_deref())
            .or(self.updated_at)
            .unwrap_or(now);

        let departure = self.created_at.unwrap_or(now - Duration::days(DEFAULT_DEPARTURE_AGE_DAYS));

        let status = if progress.is_complete() {
            VesselStatus::Moored
        } else {
            VesselStatus::Underway
        };

        let events = vec![
            RiskEvent {
                id: "1".into(),
                event_type: "Departure".into(),
                severity: None,
                date: departure,
                description: format!("Departed from {}", pol.code),
                location: Some(pol.name.clone()),
                status: Some(EventStatus::Completed),
                alert: false,
            },
            RiskEvent {
                id: "2".into(),
                event_type: "In Transit".into(),
                severity: None,
                date: last_update,
                description: "Vessel in transit".into(),
                location: None,
                status: Some(EventStatus::Active),
                alert: false,
            },
            RiskEvent {
                id: "3".into(),
                event_type: "Arrival".into(),
                severity: None,
                date: eta,
                description: format!("Expected arrival at {}", pod.code),
                location: Some(pod.name.clone()),
                status: Some(EventStatus::Pending),
                alert: false,
            },
        ];

        Ok(Vessel {
            id: self.id.clone(),
            name: fields.vessel_name.trim().to_owned(),
            imo: fields.imo.clone().unwrap_or_else(|| seed.imo()),
            flag: "US".into(),
            vessel_type: "Container Ship".into(),
            status,
            voyage_status: fields.voyage_status.unwrap_or(VoyageStatus::OnTime),
            risk_score,
            container_id: fields
                .container_id
                .clone()
                .unwrap_or_else(|| seed.container_id()),
            heading: position.bearing_to(&pod.position),
            position,
            speed: fields.speed.unwrap_or(DEFAULT_SPEED_KNOTS),
            last_update,
            eta,
            original_eta,
            eta_delta,
            days_to_arrival,
            progress,
            path,
            predicted_path,
            original_path: None,
            events,
            cargo: Some(CargoInfo {
                cargo_type: "Container".into(),
                weight: "24,000 kg".into(),
                commodity: "General Cargo".into(),
                pieces: seed.cargo_pieces(),
                seal: seed.cargo_seal(),
            }),
            alert: None,
            pol,
            pod,
        })
    }
}

fn port_call(
    code: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
    fallback: Coordinates,
) -> PortCall {
    let code = code.trim().to_uppercase();
    let catalog = find_port(&code);

    let position = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Coordinates::new(longitude, latitude),
        _ => catalog.map(|p| p.position).unwrap_or(fallback),
    };

    PortCall {
        name: catalog.map_or_else(|| code.clone(), |p| p.name.to_owned()),
        code,
        position,
    }
}

fn parse_timestamp(field: &'static str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    match DateTime::parse_from_rfc3339(value) {
        Ok(v) => Some(v.with_timezone(&Utc)),
        Err(e) => {
            warn!("failed to parse '{field}' timestamp '{value}': {e:?}");
            None
        }
    }
}

fn days_until(now: DateTime<Utc>, eta: DateTime<Utc>) -> u32 {
    let seconds = (eta - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        ((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY) as u32
    }
}
