use geo::{Coord, coord};
use serde::{Deserialize, Serialize};

/// A position in degrees, longitude first to match the rendering surface's `[x, y]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub const fn new(longitude: f64, latitude: f64) -> Coordinates {
        Coordinates {
            longitude,
            latitude,
        }
    }

    /// Linear interpolation in longitude/latitude space, `t = 0` yields `self`.
    pub fn lerp(&self, other: &Coordinates, t: f64) -> Coordinates {
        Coordinates {
            longitude: self.longitude + (other.longitude - self.longitude) * t,
            latitude: self.latitude + (other.latitude - self.latitude) * t,
        }
    }

    /// Initial great-circle bearing towards `other` in degrees within `[0, 360)`.
    pub fn bearing_to(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let y = delta_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        coord! { x: value.longitude, y: value.latitude }
    }
}
