use std::{ops::Deref, sync::Arc};

use tracing::trace;

use crate::{IconLayer, Layer, LayerId, VesselCollection, VesselId, compose_layers};

/// A shared, immutable list of render layers.
#[derive(Debug, Clone)]
pub struct LayerStack(Arc<[Layer]>);

impl LayerStack {
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.0.iter().find(|l| l.id() == id)
    }

    pub fn vessel_markers(&self) -> Option<&IconLayer> {
        self.get(LayerId::VesselIcons).and_then(Layer::as_icon)
    }

    pub fn ptr_eq(&self, other: &LayerStack) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for LayerStack {
    type Target = [Layer];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Memoizes [compose_layers] on the identity of the vessel collection and the selected id,
/// camera and view mode changes never cause a recomputation.
#[derive(Debug, Default)]
pub struct LayerCache {
    entry: Option<CacheEntry>,
    recomputations: u64,
}

#[derive(Debug)]
struct CacheEntry {
    vessels: VesselCollection,
    selected: Option<VesselId>,
    layers: LayerStack,
}

impl LayerCache {
    pub fn layers(&mut self, vessels: &VesselCollection, selected: Option<&VesselId>) -> LayerStack {
        if let Some(entry) = &self.entry {
            if entry.vessels.ptr_eq(vessels) && entry.selected.as_ref() == selected {
                return entry.layers.clone();
            }
        }

        self.recomputations += 1;
        trace!("recomputing layers, vessels: {}", vessels.len());

        let layers = LayerStack(Arc::from(compose_layers(vessels, selected)));
        self.entry = Some(CacheEntry {
            vessels: vessels.clone(),
            selected: selected.cloned(),
            layers: layers.clone(),
        });

        layers
    }

    /// Number of times the layers have been composed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
