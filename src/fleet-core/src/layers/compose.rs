use crate::{
    IconLayer, Layer, LayerId, MarkerFeature, PathFeature, PathLayer, PointFeature, Rgba,
    RiskTier, ScatterLayer, Vessel, VesselId,
};

pub const DEVIATION_COLOR: Rgba = Rgba::rgb(249, 115, 22);
pub const PREDICTED_COLOR: Rgba = Rgba::rgb(100, 116, 139);
pub const PRIMARY_COLOR: Rgba = Rgba::rgb(14, 165, 233);
pub const CRITICAL_COLOR: Rgba = Rgba::rgb(239, 68, 68);
pub const WARNING_COLOR: Rgba = Rgba::rgb(245, 158, 11);
pub const SAFE_COLOR: Rgba = Rgba::rgb(20, 184, 166);
pub const POL_COLOR: Rgba = Rgba::rgb(59, 130, 246);
pub const POD_COLOR: Rgba = Rgba::rgb(16, 185, 129);
pub const PORT_OUTLINE_COLOR: Rgba = Rgba::rgb(255, 255, 255);
pub const HALO_FILL_COLOR: Rgba = PRIMARY_COLOR.with_alpha(50);

pub const MARKER_SIZE: f64 = 30.0;
pub const SELECTED_MARKER_SIZE: f64 = 45.0;
pub const TRACK_WIDTH: f64 = 2.0;
pub const SELECTED_TRACK_WIDTH: f64 = 4.0;
/// Radii in meters.
pub const PORT_RADIUS: f64 = 10_000.0;
pub const HALO_RADIUS: f64 = 50_000.0;

/// Tracks of unselected vessels above this risk score are drawn in [CRITICAL_COLOR].
pub const TRACK_RISK_THRESHOLD: u8 = 70;

const ROUTE_DASH: [f64; 2] = [4.0, 2.0];
const PREDICTED_DASH: [f64; 2] = [2.0, 3.0];

/// Derives the render layers of the fleet.
///
/// The result always holds one layer per [LayerId] in render order, layers without data
/// (no selection, no deviation) are present with an empty data set. A selected id that does
/// not resolve to a vessel behaves like no selection for the selection bound layers.
pub fn compose_layers(vessels: &[Vessel], selected: Option<&VesselId>) -> Vec<Layer> {
    let selected_vessel = selected.and_then(|id| vessels.iter().find(|v| &v.id == id));
    let is_selected = |v: &Vessel| selected == Some(&v.id);

    vec![
        Layer::Path(original_routes(selected_vessel)),
        Layer::Path(predicted_routes(vessels)),
        Layer::Path(active_routes(vessels, &is_selected)),
        Layer::Scatter(port_markers(selected_vessel)),
        Layer::Icon(vessel_icons(vessels, &is_selected)),
        Layer::Scatter(selection_halo(selected_vessel)),
    ]
}

pub fn marker_color(vessel: &Vessel) -> Rgba {
    match vessel.risk_score.tier() {
        RiskTier::Critical => CRITICAL_COLOR,
        RiskTier::Warning => WARNING_COLOR,
        RiskTier::Safe => SAFE_COLOR,
    }
}

pub fn track_color(vessel: &Vessel, selected: bool) -> Rgba {
    if !selected && vessel.risk_score.value() > TRACK_RISK_THRESHOLD {
        CRITICAL_COLOR
    } else {
        PRIMARY_COLOR
    }
}

fn original_routes(selected: Option<&Vessel>) -> PathLayer {
    let features = selected
        .and_then(|v| {
            v.original_path.as_ref().map(|path| PathFeature {
                vessel_id: v.id.clone(),
                path: path.clone(),
                color: DEVIATION_COLOR,
                width: TRACK_WIDTH,
            })
        })
        .into_iter()
        .collect();

    PathLayer {
        id: LayerId::OriginalRoutes,
        dash_array: Some(ROUTE_DASH),
        width_min_pixels: 1.0,
        features,
    }
}

fn predicted_routes(vessels: &[Vessel]) -> PathLayer {
    PathLayer {
        id: LayerId::PredictedRoutes,
        dash_array: Some(PREDICTED_DASH),
        width_min_pixels: 1.0,
        features: vessels
            .iter()
            .map(|v| PathFeature {
                vessel_id: v.id.clone(),
                path: v.predicted_path.clone(),
                color: PREDICTED_COLOR,
                width: TRACK_WIDTH,
            })
            .collect(),
    }
}

fn active_routes(vessels: &[Vessel], is_selected: &impl Fn(&Vessel) -> bool) -> PathLayer {
    PathLayer {
        id: LayerId::ActiveRoutes,
        dash_array: None,
        width_min_pixels: 2.0,
        features: vessels
            .iter()
            .map(|v| {
                let selected = is_selected(v);
                PathFeature {
                    vessel_id: v.id.clone(),
                    path: v.path.clone(),
                    color: track_color(v, selected),
                    width: if selected {
                        SELECTED_TRACK_WIDTH
                    } else {
                        TRACK_WIDTH
                    },
                }
            })
            .collect(),
    }
}

fn port_markers(selected: Option<&Vessel>) -> ScatterLayer {
    let features = selected
        .map(|v| {
            vec![
                PointFeature {
                    key: v.pol.code.clone(),
                    position: v.pol.position,
                    radius: PORT_RADIUS,
                    fill_color: POL_COLOR,
                    line_color: PORT_OUTLINE_COLOR,
                },
                PointFeature {
                    key: v.pod.code.clone(),
                    position: v.pod.position,
                    radius: PORT_RADIUS,
                    fill_color: POD_COLOR,
                    line_color: PORT_OUTLINE_COLOR,
                },
            ]
        })
        .unwrap_or_default();

    ScatterLayer {
        id: LayerId::PolPodMarkers,
        stroked: true,
        filled: true,
        radius_min_pixels: 5.0,
        line_width_min_pixels: 2.0,
        features,
    }
}

fn vessel_icons(vessels: &[Vessel], is_selected: &impl Fn(&Vessel) -> bool) -> IconLayer {
    IconLayer {
        id: LayerId::VesselIcons,
        pickable: true,
        features: vessels
            .iter()
            .map(|v| MarkerFeature {
                vessel_id: v.id.clone(),
                position: v.position,
                size: if is_selected(v) {
                    SELECTED_MARKER_SIZE
                } else {
                    MARKER_SIZE
                },
                color: marker_color(v),
            })
            .collect(),
    }
}

fn selection_halo(selected: Option<&Vessel>) -> ScatterLayer {
    ScatterLayer {
        id: LayerId::SelectionHalo,
        stroked: true,
        filled: true,
        radius_min_pixels: 0.0,
        line_width_min_pixels: 2.0,
        features: selected
            .map(|v| PointFeature {
                key: v.id.to_string(),
                position: v.position,
                radius: HALO_RADIUS,
                fill_color: HALO_FILL_COLOR,
                line_color: PRIMARY_COLOR,
            })
            .into_iter()
            .collect(),
    }
}
