use serde::Serialize;

use crate::{Vessel, VoyageStatus};

/// Headline figures of the fleet shown above the map and list views.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub critical: usize,
    /// `None` for an empty fleet.
    pub mean_risk_score: Option<f64>,
}

impl FleetSummary {
    pub fn from_vessels(vessels: &[Vessel]) -> FleetSummary {
        let mut summary = FleetSummary {
            total: vessels.len(),
            ..Default::default()
        };

        let mut risk_sum = 0.0;

        for v in vessels {
            if v.voyage_status == VoyageStatus::OnTime {
                summary.on_time += 1;
            }
            if !v.eta_delta.is_on_time() {
                summary.delayed += 1;
            }
            if v.voyage_status == VoyageStatus::Critical {
                summary.critical += 1;
            }
            risk_sum += v.risk_score.value() as f64;
        }

        if !vessels.is_empty() {
            summary.mean_risk_score = Some(risk_sum / vessels.len() as f64);
        }

        summary
    }
}

/// Case-insensitive substring match over name, container id, IMO and port codes.
/// An empty (or blank) query matches every vessel.
pub fn search<'a>(vessels: &'a [Vessel], query: &str) -> Vec<&'a Vessel> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vessels.iter().collect();
    }

    vessels
        .iter()
        .filter(|v| {
            [
                v.name.as_str(),
                v.container_id.as_str(),
                v.imo.as_str(),
                v.pol.code.as_str(),
                v.pod.code.as_str(),
            ]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}
