use chrono::Utc;
use rand::{random, random_range};

use crate::*;

impl ShipmentFields {
    pub fn test_default() -> ShipmentFields {
        ShipmentFields {
            vessel_name: "test_vessel".into(),
            pol_code: "SGSIN".into(),
            pod_code: "USNYC".into(),
            risk_score: Some(random_range(0..=100)),
            speed: Some(random_range(5.0..25.0)),
            progress: Some(random_range(0.0..100.0)),
            ..Default::default()
        }
    }
}

impl ShipmentRecord {
    pub fn test_default() -> ShipmentRecord {
        let now = Utc::now();
        ShipmentRecord {
            id: VesselId::new(format!("test-{}", random::<u32>())),
            fields: ShipmentFields::test_default(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl Vessel {
    pub fn test_default(id: &str, risk_score: u8) -> Vessel {
        let mut record = ShipmentRecord::test_default();
        record.id = id.into();
        record.fields.risk_score = Some(risk_score as i64);
        record.to_vessel(Utc::now()).unwrap()
    }

    pub fn with_position(mut self, position: Coordinates) -> Vessel {
        self.position = position;
        self
    }
}
