use async_trait::async_trait;

use crate::{Result, Subscription};

#[async_trait]
pub trait ShipmentOutbound: Send + Sync {
    /// Subscribes to snapshots of the remote store.
    ///
    /// The current snapshot is delivered right away, a new one after every change.
    async fn subscribe(&self) -> Result<Subscription>;
}
