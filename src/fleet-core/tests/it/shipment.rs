use chrono::{DateTime, Duration, TimeZone, Utc};
use fleet_core::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn record(id: &str, fields: ShipmentFields) -> ShipmentRecord {
    ShipmentRecord {
        id: id.into(),
        fields,
        created_at: Some(now() - Duration::days(3)),
        updated_at: Some(now() - Duration::hours(1)),
    }
}

fn minimal(name: &str, pol: &str, pod: &str) -> ShipmentFields {
    ShipmentFields {
        vessel_name: name.into(),
        pol_code: pol.into(),
        pod_code: pod.into(),
        ..Default::default()
    }
}

#[test]
fn test_minimal_record_is_filled_with_defaults() {
    let vessel = record("ship-1", minimal("X", "SGSIN", "USNYC"))
        .to_vessel(now())
        .unwrap();

    assert_eq!(vessel.name, "X");
    assert_eq!(vessel.pol.code, "SGSIN");
    assert_eq!(vessel.pol.name, "Singapore");
    assert_eq!(vessel.pod.code, "USNYC");
    assert_eq!(vessel.pod.name, "New York");
    assert_eq!(vessel.pod.position, Coordinates::new(-74.0, 40.7));
    assert_eq!(vessel.risk_score.value(), 12);
    assert_eq!(vessel.voyage_status, VoyageStatus::OnTime);
    assert_eq!(vessel.status, VesselStatus::Underway);
    assert_eq!(vessel.speed, 14.0);
    assert_eq!(vessel.progress.percent(), 45.0);
    assert_eq!(vessel.flag, "US");
    assert_eq!(vessel.vessel_type, "Container Ship");
    assert_eq!(vessel.eta, now() + Duration::days(10));
    assert_eq!(vessel.original_eta, vessel.eta);
    assert_eq!(vessel.eta_delta, EtaDelta::OnTime);
    assert_eq!(vessel.days_to_arrival, 10);
    assert_eq!(vessel.last_update, now() - Duration::hours(1));
    assert!(vessel.imo.starts_with("IMO"));
    assert!(vessel.container_id.starts_with("MCLU"));
    assert!(vessel.original_path.is_none());

    let cargo = vessel.cargo.unwrap();
    assert!((20..100).contains(&cargo.pieces));
    assert!(cargo.seal.starts_with("SL"));
}

#[test]
fn test_mapping_the_same_record_twice_is_identical() {
    let record = record("ship-1", minimal("X", "SGSIN", "USNYC"));

    assert_eq!(
        record.to_vessel(now()).unwrap(),
        record.to_vessel(now()).unwrap()
    );
}

#[test]
fn test_defaults_differ_between_records() {
    let a = record("ship-1", minimal("X", "SGSIN", "USNYC"))
        .to_vessel(now())
        .unwrap();
    let b = record("ship-2", minimal("X", "SGSIN", "USNYC"))
        .to_vessel(now())
        .unwrap();

    assert_ne!(a.container_id, b.container_id);
    assert_ne!(a.cargo.unwrap().seal, b.cargo.unwrap().seal);
}

#[test]
fn test_geometry_is_derived_from_ports_and_progress() {
    let vessel = record("ship-1", minimal("X", "SGSIN", "USNYC"))
        .to_vessel(now())
        .unwrap();

    assert_eq!(vessel.path.len(), 10);
    assert_eq!(vessel.path[0], Coordinates::new(103.8, 1.35));
    assert_eq!(vessel.position, *vessel.path.last().unwrap());
    assert_eq!(vessel.predicted_path.len(), 21);
    assert_eq!(vessel.predicted_path[0], vessel.position);
    assert_eq!(vessel.heading, vessel.position.bearing_to(&vessel.pod.position));
}

#[test]
fn test_completed_voyage_is_moored_at_discharge_port() {
    let vessel = record(
        "ship-1",
        ShipmentFields {
            progress: Some(100.0),
            ..minimal("X", "SGSIN", "USNYC")
        },
    )
    .to_vessel(now())
    .unwrap();

    assert_eq!(vessel.status, VesselStatus::Moored);
    assert_eq!(vessel.path.len(), 21);
    assert!((vessel.position.longitude - -74.0).abs() < 1e-9);
    assert!((vessel.position.latitude - 40.7).abs() < 1e-9);
}

#[test]
fn test_record_coordinates_take_precedence_over_catalog() {
    let vessel = record(
        "ship-1",
        ShipmentFields {
            pol_lat: Some(10.0),
            pol_lon: Some(20.0),
            ..minimal("X", "SGSIN", "USNYC")
        },
    )
    .to_vessel(now())
    .unwrap();

    assert_eq!(vessel.pol.position, Coordinates::new(20.0, 10.0));
    assert_eq!(vessel.path[0], Coordinates::new(20.0, 10.0));
}

#[test]
fn test_unknown_ports_fall_back_to_default_positions() {
    let vessel = record("ship-1", minimal("X", "xxabc", "XXDEF"))
        .to_vessel(now())
        .unwrap();

    assert_eq!(vessel.pol.code, "XXABC");
    assert_eq!(vessel.pol.name, "XXABC");
    assert_eq!(vessel.pol.position, DEFAULT_POL_POSITION);
    assert_eq!(vessel.pod.position, DEFAULT_POD_POSITION);
}

#[test]
fn test_eta_delta_falls_back_to_day_difference() {
    let vessel = record(
        "ship-1",
        ShipmentFields {
            carrier_eta: Some("2025-03-10T00:00:00Z".into()),
            predicted_eta: Some("2025-03-23T00:00:00Z".into()),
            ..minimal("X", "SGSIN", "USNYC")
        },
    )
    .to_vessel(now())
    .unwrap();

    assert_eq!(vessel.eta_delta, EtaDelta::Days(13));
    assert_eq!(vessel.eta, Utc.with_ymd_and_hms(2025, 3, 23, 0, 0, 0).unwrap());
    assert_eq!(
        vessel.original_eta,
        Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap()
    );
    assert_eq!(vessel.days_to_arrival, 22);
}

#[test]
fn test_explicit_eta_delta_wins_and_garbage_is_ignored() {
    let fields = ShipmentFields {
        carrier_eta: Some("2025-03-10T00:00:00Z".into()),
        predicted_eta: Some("2025-03-23T00:00:00Z".into()),
        ..minimal("X", "SGSIN", "USNYC")
    };

    let vessel = record(
        "ship-1",
        ShipmentFields {
            eta_delta: Some("+5d".into()),
            ..fields.clone()
        },
    )
    .to_vessel(now())
    .unwrap();
    assert_eq!(vessel.eta_delta, EtaDelta::Days(5));

    let vessel = record(
        "ship-1",
        ShipmentFields {
            eta_delta: Some("soon".into()),
            ..fields
        },
    )
    .to_vessel(now())
    .unwrap();
    assert_eq!(vessel.eta_delta, EtaDelta::Days(13));
}

#[test]
fn test_unparseable_timestamps_are_ignored() {
    let vessel = record(
        "ship-1",
        ShipmentFields {
            predicted_eta: Some("next tuesday".into()),
            last_update: Some("".into()),
            ..minimal("X", "SGSIN", "USNYC")
        },
    )
    .to_vessel(now())
    .unwrap();

    assert_eq!(vessel.eta, now() + Duration::days(10));
    assert_eq!(vessel.last_update, now() - Duration::hours(1));
}

#[test]
fn test_synthetic_events_follow_the_voyage() {
    let vessel = record("ship-1", minimal("X", "SGSIN", "USNYC"))
        .to_vessel(now())
        .unwrap();

    let statuses: Vec<_> = vessel.events.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            Some(EventStatus::Completed),
            Some(EventStatus::Active),
            Some(EventStatus::Pending)
        ]
    );
    assert_eq!(vessel.events[0].date, now() - Duration::days(3));
    assert_eq!(vessel.events[2].date, vessel.eta);
}

#[test]
fn test_missing_required_fields_are_rejected() {
    for (fields, missing) in [
        (minimal("  ", "SGSIN", "USNYC"), "vesselName"),
        (minimal("X", "", "USNYC"), "polCode"),
        (minimal("X", "SGSIN", ""), "podCode"),
    ] {
        let err = record("ship-1", fields).to_vessel(now()).unwrap_err();
        assert!(
            matches!(err, ValidationError::MissingField { field, .. } if field == missing),
            "{err:?}"
        );
    }
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let invalid = [
        ShipmentFields {
            risk_score: Some(150),
            ..minimal("X", "SGSIN", "USNYC")
        },
        ShipmentFields {
            progress: Some(-1.0),
            ..minimal("X", "SGSIN", "USNYC")
        },
        ShipmentFields {
            days_to_arrival: Some(-3),
            ..minimal("X", "SGSIN", "USNYC")
        },
        ShipmentFields {
            days_to_arrival: Some(u32::MAX as i64 + 2),
            ..minimal("X", "SGSIN", "USNYC")
        },
        ShipmentFields {
            pod_lat: Some(91.0),
            pod_lon: Some(0.0),
            ..minimal("X", "SGSIN", "USNYC")
        },
    ];

    for fields in invalid {
        let err = record("ship-1", fields).to_vessel(now()).unwrap_err();
        assert!(
            matches!(err, ValidationError::OutOfRange { .. }),
            "{err:?}"
        );
    }
}

#[test]
fn test_admit_snapshot_rejects_invalid_records_only() {
    let records = vec![
        record("a", minimal("A", "SGSIN", "USNYC")),
        record("b", minimal("B", "SGSIN", "")),
        record("c", minimal("C", "CNSHA", "NLRTM")),
    ];

    let admission = admit_snapshot(&records, now());

    let ids: Vec<_> = admission.vessels.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(admission.rejected.len(), 1);
    assert!(admission.rejected[0].is_validation());
    assert!(matches!(
        &admission.rejected[0],
        Error::Validation { id, .. } if id.as_str() == "b"
    ));
}

#[test]
fn test_patch_only_overwrites_present_fields() {
    let mut fields = ShipmentFields {
        imo: Some("IMO9811000".into()),
        risk_score: Some(40),
        ..minimal("X", "SGSIN", "USNYC")
    };

    ShipmentPatch {
        vessel_name: Some("Y".into()),
        risk_score: Some(85),
        status: Some(ShipmentStatus::Critical),
        ..Default::default()
    }
    .apply(&mut fields);

    assert_eq!(fields.vessel_name, "Y");
    assert_eq!(fields.risk_score, Some(85));
    assert_eq!(fields.status, Some(ShipmentStatus::Critical));
    assert_eq!(fields.imo.as_deref(), Some("IMO9811000"));
    assert_eq!(fields.pol_code, "SGSIN");
}

#[test]
fn test_server_defaults_fill_only_missing_values() {
    let fields = ShipmentFields {
        risk_score: Some(60),
        ..minimal("X", "SGSIN", "USNYC")
    }
    .with_server_defaults();

    assert_eq!(fields.risk_score, Some(60));
    assert_eq!(fields.status, Some(ShipmentStatus::Safe));
    assert_eq!(fields.voyage_status, Some(VoyageStatus::OnTime));
}

#[test]
fn test_record_deserializes_from_remote_json() {
    let record: ShipmentRecord = serde_json::from_str(
        r#"{
            "id": "r1",
            "vesselName": "Ever Given",
            "polCode": "CNYTN",
            "podCode": "NLRTM",
            "riskScore": 85,
            "status": "CRITICAL",
            "voyageStatus": "Critical",
            "etaDelta": "+13d",
            "createdAt": "2025-02-20T08:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(record.id.as_str(), "r1");
    assert_eq!(record.fields.status, Some(ShipmentStatus::Critical));
    assert_eq!(record.fields.voyage_status, Some(VoyageStatus::Critical));
    assert!(record.updated_at.is_none());

    let vessel = record.to_vessel(now()).unwrap();
    let json = serde_json::to_value(&vessel).unwrap();
    assert_eq!(json["etaDelta"], "+13d");
    assert_eq!(json["type"], "Container Ship");
    assert_eq!(json["riskScore"], 85);
    assert_eq!(json["voyageStatus"], "Critical");
}
