use std::{sync::Arc, time::Duration};

use chrono::Utc;
use shipment_store::MemoryShipmentStore;
use tracing::{error, info, instrument};

use crate::{error::Result, settings::Settings, tracker::FleetTracker};

pub struct App {
    tracker: FleetTracker,
    store: MemoryShipmentStore,
    sync_interval: Duration,
}

impl App {
    pub async fn build(settings: &Settings) -> Result<App> {
        let store = MemoryShipmentStore::new(settings.snapshot_buffer_size);

        if settings.seed_demo_data {
            store.seed_if_empty(Utc::now()).map_err(fleet_core::Error::from)?;
        }

        let tracker = FleetTracker::connect(
            Arc::new(store.clone()),
            settings.initial_viewport.unwrap_or_default(),
        )
        .await?;

        Ok(App {
            tracker,
            store,
            sync_interval: settings.sync_interval,
        })
    }

    pub fn tracker(&self) -> &FleetTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut FleetTracker {
        &mut self.tracker
    }

    pub fn shipment_store(&self) -> &MemoryShipmentStore {
        &self.store
    }

    pub async fn run(mut self) {
        loop {
            self.run_impl().await;
            // Snapshots published while sleeping are coalesced into one.
            tokio::time::sleep(self.sync_interval).await;
        }
    }

    #[instrument(skip_all)]
    async fn run_impl(&mut self) {
        if let Err(e) = self.run_inner().await {
            error!("fleet sync failed: {e:?}");
            if let Err(e) = self.tracker.resubscribe().await {
                error!("failed to resubscribe: {e:?}");
            }
        }
    }

    #[instrument(skip_all)]
    async fn run_inner(&mut self) -> Result<()> {
        self.tracker.wait_for_snapshot().await?;

        let summary = self.tracker.summary();
        info!(
            "fleet total: {}, on time: {}, delayed: {}, critical: {}",
            summary.total, summary.on_time, summary.delayed, summary.critical
        );

        Ok(())
    }
}
