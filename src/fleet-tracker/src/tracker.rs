use std::sync::Arc;

use chrono::Utc;
use fleet_core::{
    Coordinates, FleetSummary, LayerCache, LayerStack, NewShipment, ShipmentPatch,
    ShipmentRecord, Subscription, SyncBridge, Vessel, VesselCollection, VesselId, VesselStore,
    ViewMode, Viewport, admit_snapshot, search,
};
use tracing::{error, info, instrument};

use crate::error::Result;

/// Composition root of the fleet view.
///
/// Owns the [VesselStore] and the memoized layers, applies remote snapshots delivered by the
/// [SyncBridge] and forwards user mutations to it. Remote mutations never touch local state,
/// they become visible with the snapshot that confirms them.
pub struct FleetTracker {
    store: VesselStore,
    layers: LayerCache,
    bridge: Arc<dyn SyncBridge>,
    subscription: Subscription,
}

impl FleetTracker {
    pub async fn connect(bridge: Arc<dyn SyncBridge>, viewport: Viewport) -> Result<FleetTracker> {
        let subscription = bridge.subscribe().await?;
        Ok(FleetTracker {
            store: VesselStore::new(viewport),
            layers: LayerCache::default(),
            bridge,
            subscription,
        })
    }

    /// Replaces the subscription, used after the previous one closed.
    pub async fn resubscribe(&mut self) -> Result<()> {
        self.subscription = self.bridge.subscribe().await?;
        Ok(())
    }

    /// Waits for the next snapshot and applies it, returns the number of admitted vessels.
    ///
    /// On failure the last applied collection is kept.
    pub async fn wait_for_snapshot(&mut self) -> Result<usize> {
        let snapshot = self.subscription.next().await?;
        Ok(self.apply(&snapshot))
    }

    /// Applies the most recent queued snapshot without waiting, returns whether there was one.
    pub fn sync_pending(&mut self) -> bool {
        match self.subscription.try_latest() {
            Some(snapshot) => {
                self.apply(&snapshot);
                true
            }
            None => false,
        }
    }

    #[instrument(skip_all)]
    fn apply(&mut self, snapshot: &[ShipmentRecord]) -> usize {
        let admission = admit_snapshot(snapshot, Utc::now());
        let admitted = admission.vessels.len();

        self.store.ingest(admission.vessels);

        info!(
            "applied snapshot, admitted: {admitted}, rejected: {}",
            admission.rejected.len()
        );
        admitted
    }

    pub fn store(&self) -> &VesselStore {
        &self.store
    }

    pub fn vessels(&self) -> &VesselCollection {
        self.store.vessels()
    }

    pub fn layers(&mut self) -> LayerStack {
        self.layers
            .layers(self.store.vessels(), self.store.selected_vessel_id())
    }

    /// Number of times the render layers have been recomputed.
    pub fn layer_recomputations(&self) -> u64 {
        self.layers.recomputations()
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary::from_vessels(self.store.vessels())
    }

    pub fn search(&self, query: &str) -> Vec<&Vessel> {
        search(self.store.vessels(), query)
    }

    pub fn select(&mut self, id: Option<VesselId>) {
        self.store.select(id);
    }

    /// Selects the vessel whose marker contains `point`, if any.
    /// A click on empty map leaves the selection untouched.
    pub fn select_at(&mut self, point: Coordinates, degrees_per_pixel: f64) -> Option<VesselId> {
        let layers = self.layers();
        let id = layers
            .vessel_markers()
            .and_then(|m| m.hit_test(point, degrees_per_pixel))
            .cloned()?;

        self.store.select(Some(id.clone()));
        Some(id)
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.store.set_view_mode(mode);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.store.set_viewport(viewport);
    }

    pub fn update_position(&mut self, id: &VesselId, position: Coordinates) -> bool {
        self.store.update_position(id, position)
    }

    #[instrument(skip_all)]
    pub async fn create(&self, shipment: NewShipment) -> Result<VesselId> {
        self.bridge.create(shipment).await.map_err(|e| {
            error!("failed to create shipment: {e:?}");
            e.into()
        })
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &VesselId, patch: ShipmentPatch) -> Result<()> {
        self.bridge.update(id, patch).await.map_err(|e| {
            error!("failed to update shipment: {e:?}");
            e.into()
        })
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &VesselId) -> Result<()> {
        self.bridge.remove(id).await.map_err(|e| {
            error!("failed to remove shipment: {e:?}");
            e.into()
        })
    }
}
