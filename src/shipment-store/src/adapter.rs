use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fleet_core::{
    NewShipment, ShipmentInbound, ShipmentOutbound, ShipmentPatch, ShipmentRecord, Snapshot,
    SnapshotSender, Subscription, VesselId, snapshot_channel,
};
use snafu::{IntoError, ResultExt, ensure};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    Result, demo_shipments,
    error::error::{LockPoisonedSnafu, NotFoundSnafu, OfflineSnafu, ValidationSnafu},
};

/// Shipment store kept in process memory.
///
/// Clones share the same state. Every mutation publishes a fresh snapshot, ordered most
/// recently updated first, to all live subscribers.
#[derive(Debug, Clone)]
pub struct MemoryShipmentStore {
    inner: Arc<Mutex<Inner>>,
    snapshot_buffer_size: usize,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<VesselId, StoredRecord>,
    subscribers: Vec<SnapshotSender>,
    sequence: u64,
    offline: bool,
}

#[derive(Debug)]
struct StoredRecord {
    record: ShipmentRecord,
    sequence: u64,
}

impl MemoryShipmentStore {
    pub fn new(snapshot_buffer_size: usize) -> MemoryShipmentStore {
        MemoryShipmentStore {
            inner: Default::default(),
            snapshot_buffer_size,
        }
    }

    /// Simulates a lost connection, all calls fail while offline.
    pub fn set_offline(&self, offline: bool) -> Result<()> {
        self.lock()?.offline = offline;
        Ok(())
    }

    /// Inserts the demo fleet if the store holds no shipments, returns whether it did.
    #[instrument(skip_all)]
    pub fn seed_if_empty(&self, now: DateTime<Utc>) -> Result<bool> {
        let mut inner = self.lock_online()?;
        if !inner.records.is_empty() {
            return Ok(false);
        }

        let demo = demo_shipments(now);
        let count = demo.len();
        for shipment in demo {
            inner.insert(shipment, now)?;
        }
        inner.broadcast();

        info!("seeded {count} demo shipments");
        Ok(true)
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.lock_online()?.snapshot())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| LockPoisonedSnafu.build())
    }

    fn lock_online(&self) -> Result<MutexGuard<'_, Inner>> {
        let inner = self.lock()?;
        ensure!(!inner.offline, OfflineSnafu);
        Ok(inner)
    }
}

impl Inner {
    fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    fn insert(&mut self, shipment: NewShipment, now: DateTime<Utc>) -> Result<VesselId> {
        let id = VesselId::new(Uuid::new_v4().to_string());
        shipment
            .validate()
            .context(ValidationSnafu { id: id.clone() })?;

        let sequence = self.next_sequence();
        self.records.insert(
            id.clone(),
            StoredRecord {
                record: ShipmentRecord {
                    id: id.clone(),
                    fields: shipment.with_server_defaults(),
                    created_at: Some(now),
                    updated_at: Some(now),
                },
                sequence,
            },
        );

        Ok(id)
    }

    fn snapshot(&self) -> Snapshot {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| {
            b.record
                .updated_at
                .cmp(&a.record.updated_at)
                .then(b.sequence.cmp(&a.sequence))
        });
        records.into_iter().map(|r| r.record.clone()).collect()
    }

    fn broadcast(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.retain(|s| match s.publish(snapshot.clone()) {
            Ok(()) => true,
            Err(e) => {
                debug!("dropping closed subscriber: {e:?}");
                false
            }
        });
    }
}

#[async_trait]
impl ShipmentInbound for MemoryShipmentStore {
    #[instrument(skip_all)]
    async fn create(&self, shipment: NewShipment) -> fleet_core::Result<VesselId> {
        let mut inner = self.lock_online()?;
        let id = inner.insert(shipment, Utc::now())?;
        inner.broadcast();
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &VesselId, patch: ShipmentPatch) -> fleet_core::Result<()> {
        let mut inner = self.lock_online()?;
        let sequence = inner.next_sequence();

        let stored = inner
            .records
            .get_mut(id)
            .ok_or_else(|| NotFoundSnafu { id: id.clone() }.build())?;

        let mut fields = stored.record.fields.clone();
        patch.apply(&mut fields);
        if let Err(e) = fields.validate() {
            warn!("rejected update: {e:?}");
            return Err(ValidationSnafu { id: id.clone() }.into_error(e).into());
        }

        stored.record.fields = fields;
        stored.record.updated_at = Some(Utc::now());
        stored.sequence = sequence;

        inner.broadcast();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &VesselId) -> fleet_core::Result<()> {
        let mut inner = self.lock_online()?;
        if inner.records.remove(id).is_none() {
            return Err(NotFoundSnafu { id: id.clone() }.build().into());
        }
        inner.broadcast();
        Ok(())
    }
}

#[async_trait]
impl ShipmentOutbound for MemoryShipmentStore {
    async fn subscribe(&self) -> fleet_core::Result<Subscription> {
        let mut inner = self.lock_online()?;
        let (tx, subscription) = snapshot_channel(self.snapshot_buffer_size);
        tx.publish(inner.snapshot())?;
        inner.subscribers.push(tx);
        Ok(subscription)
    }
}
