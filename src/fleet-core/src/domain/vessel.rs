use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    Coordinates, ParseEtaDeltaError, ParseEtaDeltaSnafu, ValidationError,
    validation_error::OutOfRangeSnafu,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(String);

impl VesselId {
    pub fn new(value: impl Into<String>) -> VesselId {
        VesselId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VesselId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VesselId {
    fn from(value: &str) -> Self {
        VesselId(value.to_owned())
    }
}

impl From<String> for VesselId {
    fn from(value: String) -> Self {
        VesselId(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum VesselStatus {
    Underway,
    Moored,
    Anchored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum VoyageStatus {
    #[serde(rename = "On Time")]
    #[strum(serialize = "On Time")]
    OnTime,
    Late,
    Critical,
    Warning,
    Early,
}

/// Marker color tier of a [RiskScore].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum RiskTier {
    Safe,
    Warning,
    Critical,
}

/// Deviation/delay risk in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<RiskScore> {
        (value <= Self::MAX).then_some(RiskScore(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> RiskTier {
        match self.0 {
            80.. => RiskTier::Critical,
            50..80 => RiskTier::Warning,
            _ => RiskTier::Safe,
        }
    }
}

impl TryFrom<i64> for RiskScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(RiskScore::new)
            .ok_or_else(|| {
                OutOfRangeSnafu {
                    field: "riskScore",
                    value: value as f64,
                }
                .build()
            })
    }
}

impl From<RiskScore> for u8 {
    fn from(value: RiskScore) -> Self {
        value.0
    }
}

/// Voyage completion in percent, `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const COMPLETE: Progress = Progress(100.0);

    pub fn percent(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_complete(self) -> bool {
        self.0 >= 100.0
    }
}

impl TryFrom<f64> for Progress {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (0.0..=100.0).contains(&value) {
            Ok(Progress(value))
        } else {
            OutOfRangeSnafu {
                field: "progress",
                value,
            }
            .fail()
        }
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// Offset between the predicted and the originally planned arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EtaDelta {
    #[default]
    OnTime,
    Days(i64),
}

impl EtaDelta {
    pub fn from_days(days: i64) -> EtaDelta {
        if days == 0 {
            EtaDelta::OnTime
        } else {
            EtaDelta::Days(days)
        }
    }

    /// Whole days `predicted` lies after `original`.
    pub fn between(original: DateTime<Utc>, predicted: DateTime<Utc>) -> EtaDelta {
        EtaDelta::from_days((predicted - original).num_days())
    }

    pub fn is_on_time(&self) -> bool {
        matches!(self, EtaDelta::OnTime)
    }
}

impl fmt::Display for EtaDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtaDelta::OnTime => f.write_str("On Time"),
            EtaDelta::Days(days) => write!(f, "{days:+}d"),
        }
    }
}

impl FromStr for EtaDelta {
    type Err = ParseEtaDeltaError;

    /// Accepts `On Time`, `+13d`, `-2d`, `1 day` and `3 days`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("on time") {
            return Ok(EtaDelta::OnTime);
        }

        let days = if let Some(days) = value.strip_suffix('d') {
            days.parse::<i64>().ok()
        } else {
            let mut parts = value.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(days), Some("day" | "days"), None) => days.parse::<i64>().ok(),
                _ => None,
            }
        };

        days.map(EtaDelta::from_days)
            .ok_or_else(|| ParseEtaDeltaSnafu { value }.build())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub severity: Option<RiskLevel>,
    pub date: DateTime<Utc>,
    pub description: String,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoInfo {
    #[serde(rename = "type")]
    pub cargo_type: String,
    pub weight: String,
    pub commodity: String,
    pub pieces: u32,
    pub seal: String,
}

/// Port of loading or discharge of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortCall {
    pub code: String,
    pub name: String,
    pub position: Coordinates,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: VesselId,
    pub name: String,
    pub imo: String,
    pub flag: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub status: VesselStatus,
    pub voyage_status: VoyageStatus,
    pub risk_score: RiskScore,
    pub container_id: String,
    /// Port of loading.
    pub pol: PortCall,
    /// Port of discharge.
    pub pod: PortCall,
    pub position: Coordinates,
    pub heading: f64,
    /// Speed over ground in knots.
    pub speed: f64,
    pub last_update: DateTime<Utc>,
    pub eta: DateTime<Utc>,
    pub original_eta: DateTime<Utc>,
    #[serde_as(as = "DisplayFromStr")]
    pub eta_delta: EtaDelta,
    pub days_to_arrival: u32,
    pub progress: Progress,
    /// Historical track, never empty.
    pub path: Vec<Coordinates>,
    /// Future route, never empty.
    pub predicted_path: Vec<Coordinates>,
    /// Planned route, only present when the vessel has deviated from it.
    pub original_path: Option<Vec<Coordinates>>,
    pub events: Vec<RiskEvent>,
    pub cargo: Option<CargoInfo>,
    pub alert: Option<String>,
}
