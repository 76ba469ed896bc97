mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;

/// The remote shipment store as seen by the fleet: snapshot delivery plus the mutations the
/// user interface issues.
pub trait SyncBridge: ShipmentInbound + ShipmentOutbound + Send + Sync + 'static {}

impl<T> SyncBridge for T where T: ShipmentInbound + ShipmentOutbound + Send + Sync + 'static {}
