use std::{ops::Deref, sync::Arc};

use tracing::debug;

use crate::{Coordinates, Vessel, VesselId, ViewMode, Viewport};

/// Immutable snapshot of the fleet.
///
/// Every mutation of the store produces a new collection, two collections are the same
/// snapshot exactly when [VesselCollection::ptr_eq] holds.
#[derive(Debug, Clone)]
pub struct VesselCollection(Arc<[Vessel]>);

impl VesselCollection {
    pub fn ptr_eq(&self, other: &VesselCollection) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn get(&self, id: &VesselId) -> Option<&Vessel> {
        self.0.iter().find(|v| &v.id == id)
    }
}

impl Default for VesselCollection {
    fn default() -> Self {
        VesselCollection(Arc::from(Vec::new()))
    }
}

impl From<Vec<Vessel>> for VesselCollection {
    fn from(value: Vec<Vessel>) -> Self {
        VesselCollection(Arc::from(value))
    }
}

impl Deref for VesselCollection {
    type Target = [Vessel];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Canonical in-memory fleet state.
///
/// All state is private and only changes through the operations below, each of which
/// completes before returning.
#[derive(Debug, Clone, Default)]
pub struct VesselStore {
    vessels: VesselCollection,
    selected_vessel_id: Option<VesselId>,
    view_mode: ViewMode,
    viewport: Viewport,
}

impl VesselStore {
    pub fn new(viewport: Viewport) -> VesselStore {
        VesselStore {
            viewport,
            ..Default::default()
        }
    }

    pub fn vessels(&self) -> &VesselCollection {
        &self.vessels
    }

    pub fn selected_vessel_id(&self) -> Option<&VesselId> {
        self.selected_vessel_id.as_ref()
    }

    /// The selected vessel, `None` when nothing is selected or the selection is unknown.
    pub fn selected_vessel(&self) -> Option<&Vessel> {
        self.selected_vessel_id
            .as_ref()
            .and_then(|id| self.vessels.get(id))
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replaces the whole collection, nothing of the previous snapshot is retained.
    pub fn ingest(&mut self, vessels: impl Into<VesselCollection>) {
        self.vessels = vessels.into();
        debug!("ingested {} vessels", self.vessels.len());
    }

    /// Sets the selection unconditionally and flies the camera to the vessel if it exists.
    /// Unknown ids and deselection leave the viewport untouched.
    pub fn select(&mut self, id: Option<VesselId>) {
        if let Some(vessel) = id.as_ref().and_then(|id| self.vessels.get(id)) {
            self.viewport = self.viewport.fly_to(&vessel.position);
        }
        self.selected_vessel_id = id;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Moves a single vessel, returns false if no vessel has the given id.
    pub fn update_position(&mut self, id: &VesselId, position: Coordinates) -> bool {
        let Some(idx) = self.vessels.iter().position(|v| &v.id == id) else {
            return false;
        };

        let mut vessels = self.vessels.to_vec();
        vessels[idx].position = position;
        self.vessels = vessels.into();

        true
    }
}
