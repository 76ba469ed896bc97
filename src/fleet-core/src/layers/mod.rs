use geo::{Contains, Coord, Rect, coord};
use serde::Serialize;

use crate::{Coordinates, VesselId};

mod cache;
mod compose;

pub use cache::*;
pub use compose::*;

/// An RGBA color as consumed by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba([r, g, b, 255])
    }

    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        let [r, g, b, _] = self.0;
        Rgba([r, g, b, alpha])
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LayerId {
    OriginalRoutes,
    PredictedRoutes,
    ActiveRoutes,
    PolPodMarkers,
    VesselIcons,
    SelectionHalo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    Path,
    Scatter,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathFeature {
    pub vessel_id: VesselId,
    pub path: Vec<Coordinates>,
    pub color: Rgba,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathLayer {
    pub id: LayerId,
    pub dash_array: Option<[f64; 2]>,
    pub width_min_pixels: f64,
    pub features: Vec<PathFeature>,
}

/// A circle with a radius in meters, used for port markers and the selection halo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointFeature {
    /// Port code or vessel id the point belongs to.
    pub key: String,
    pub position: Coordinates,
    pub radius: f64,
    pub fill_color: Rgba,
    pub line_color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterLayer {
    pub id: LayerId,
    pub stroked: bool,
    pub filled: bool,
    pub radius_min_pixels: f64,
    pub line_width_min_pixels: f64,
    pub features: Vec<PointFeature>,
}

/// A vessel marker, `size` is in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerFeature {
    pub vessel_id: VesselId,
    pub position: Coordinates,
    pub size: f64,
    pub color: Rgba,
}

impl MarkerFeature {
    fn bounds(&self, degrees_per_pixel: f64) -> Rect<f64> {
        let half = self.size * degrees_per_pixel / 2.0;
        let Coordinates {
            longitude,
            latitude,
        } = self.position;

        Rect::new(
            coord! { x: longitude - half, y: latitude - half },
            coord! { x: longitude + half, y: latitude + half },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconLayer {
    pub id: LayerId,
    pub pickable: bool,
    pub features: Vec<MarkerFeature>,
}

impl IconLayer {
    /// The top-most vessel whose marker contains `point`.
    ///
    /// `degrees_per_pixel` converts the pixel size of a marker into map units at the
    /// current zoom level.
    pub fn hit_test(&self, point: Coordinates, degrees_per_pixel: f64) -> Option<&VesselId> {
        if !self.pickable {
            return None;
        }

        let point = Coord::from(point);
        self.features
            .iter()
            .rev()
            .find(|f| f.bounds(degrees_per_pixel).contains(&point))
            .map(|f| &f.vessel_id)
    }
}

/// A render layer descriptor, render order is the order of the list it is part of.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Layer {
    Path(PathLayer),
    Scatter(ScatterLayer),
    Icon(IconLayer),
}

impl Layer {
    pub fn id(&self) -> LayerId {
        match self {
            Layer::Path(l) => l.id,
            Layer::Scatter(l) => l.id,
            Layer::Icon(l) => l.id,
        }
    }

    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Path(_) => LayerKind::Path,
            Layer::Scatter(_) => LayerKind::Scatter,
            Layer::Icon(_) => LayerKind::Icon,
        }
    }

    /// Number of features in the layer's data set.
    pub fn len(&self) -> usize {
        match self {
            Layer::Path(l) => l.features.len(),
            Layer::Scatter(l) => l.features.len(),
            Layer::Icon(l) => l.features.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_path(&self) -> Option<&PathLayer> {
        match self {
            Layer::Path(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterLayer> {
        match self {
            Layer::Scatter(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconLayer> {
        match self {
            Layer::Icon(l) => Some(l),
            _ => None,
        }
    }
}
