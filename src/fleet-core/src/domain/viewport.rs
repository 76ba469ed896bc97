use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};

use crate::Coordinates;

/// Zoom level the camera flies to when a vessel is selected.
pub const SELECTION_ZOOM: f64 = 5.0;
/// Duration of the animated fly-to the rendering surface performs on selection.
pub const SELECTION_TRANSITION: Duration = Duration::from_millis(1000);

/// Camera pose consumed by the rendering surface.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    /// Signals an animated transition to the rendering surface, `None` means jump.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<Duration>,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            longitude: -30.0,
            latitude: 35.0,
            zoom: 2.0,
            pitch: 0.0,
            bearing: 0.0,
            transition_duration: None,
        }
    }
}

impl Viewport {
    /// Recentres on `target` at [SELECTION_ZOOM] with an animated transition.
    /// Pitch and bearing are carried over.
    pub fn fly_to(&self, target: &Coordinates) -> Viewport {
        Viewport {
            longitude: target.longitude,
            latitude: target.latitude,
            zoom: SELECTION_ZOOM,
            pitch: self.pitch,
            bearing: self.bearing,
            transition_duration: Some(SELECTION_TRANSITION),
        }
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(self.longitude, self.latitude)
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}
