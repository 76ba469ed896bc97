use chrono::{DateTime, Duration, SecondsFormat, Utc};
use fleet_core::{NewShipment, ShipmentStatus, VoyageStatus};

struct Demo {
    vessel_name: &'static str,
    imo: &'static str,
    container_id: &'static str,
    pol: (&'static str, f64, f64),
    pod: (&'static str, f64, f64),
    carrier_eta_days: i64,
    predicted_eta_days: i64,
    eta_delta: &'static str,
    status: ShipmentStatus,
    risk_score: i64,
    voyage_status: VoyageStatus,
    speed: f64,
    progress: f64,
}

static DEMO_FLEET: &[Demo] = &[
    Demo {
        vessel_name: "CMA CGM T. ROOSEVELT",
        imo: "9780873",
        container_id: "MCLU3847562",
        pol: ("SGSIN", 1.264, 103.84),
        pod: ("CNYTN", 36.067, 120.383),
        carrier_eta_days: 8,
        predicted_eta_days: 9,
        eta_delta: "1 day",
        status: ShipmentStatus::Safe,
        risk_score: 12,
        voyage_status: VoyageStatus::OnTime,
        speed: 18.0,
        progress: 65.0,
    },
    Demo {
        vessel_name: "MSC GULSUN",
        imo: "9839430",
        container_id: "MSCU9284756",
        pol: ("USNYC", 40.684, -74.006),
        pod: ("NLRTM", 51.948, 4.142),
        carrier_eta_days: 15,
        predicted_eta_days: 17,
        eta_delta: "2 days",
        status: ShipmentStatus::Critical,
        risk_score: 78,
        voyage_status: VoyageStatus::Critical,
        speed: 12.0,
        progress: 45.0,
    },
    Demo {
        vessel_name: "MAERSK ESSEX",
        imo: "9632080",
        container_id: "MAEU7392847",
        pol: ("CNSHA", 31.230, 121.473),
        pod: ("USNYC", 40.684, -74.006),
        carrier_eta_days: 12,
        predicted_eta_days: 12,
        eta_delta: "On Time",
        status: ShipmentStatus::Safe,
        risk_score: 8,
        voyage_status: VoyageStatus::OnTime,
        speed: 20.0,
        progress: 70.0,
    },
];

/// The demo fleet with arrival times relative to `now`.
pub fn demo_shipments(now: DateTime<Utc>) -> Vec<NewShipment> {
    let timestamp = |days: i64| {
        Some((now + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true))
    };

    DEMO_FLEET
        .iter()
        .map(|d| {
            let (pol_code, pol_lat, pol_lon) = d.pol;
            let (pod_code, pod_lat, pod_lon) = d.pod;
            NewShipment {
                vessel_name: d.vessel_name.into(),
                imo: Some(d.imo.into()),
                container_id: Some(d.container_id.into()),
                pol_code: pol_code.into(),
                pod_code: pod_code.into(),
                pol_lat: Some(pol_lat),
                pol_lon: Some(pol_lon),
                pod_lat: Some(pod_lat),
                pod_lon: Some(pod_lon),
                carrier_eta: timestamp(d.carrier_eta_days),
                predicted_eta: timestamp(d.predicted_eta_days),
                eta_delta: Some(d.eta_delta.into()),
                status: Some(d.status),
                risk_score: Some(d.risk_score),
                voyage_status: Some(d.voyage_status),
                speed: Some(d.speed),
                progress: Some(d.progress),
                days_to_arrival: Some(d.predicted_eta_days),
                last_update: timestamp(0),
            }
        })
        .collect()
}
