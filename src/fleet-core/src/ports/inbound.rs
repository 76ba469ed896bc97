use async_trait::async_trait;

use crate::{NewShipment, Result, ShipmentPatch, VesselId};

/// Mutations of the remote shipment store.
///
/// None of them touch local state, their effect becomes visible through the next snapshot.
#[async_trait]
pub trait ShipmentInbound: Send + Sync {
    /// Admits a new shipment and returns its assigned id.
    /// Fails with a validation error if a required field is missing.
    async fn create(&self, shipment: NewShipment) -> Result<VesselId>;
    /// Fails with [crate::Error::NotFound] if `id` does not exist.
    async fn update(&self, id: &VesselId, patch: ShipmentPatch) -> Result<()>;
    /// Fails with [crate::Error::NotFound] if `id` does not exist.
    async fn remove(&self, id: &VesselId) -> Result<()>;
}
