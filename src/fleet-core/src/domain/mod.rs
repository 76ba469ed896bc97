mod coordinates;
mod fleet;
mod port_catalog;
mod shipment;
mod vessel;
mod viewport;

pub use coordinates::*;
pub use fleet::*;
pub use port_catalog::*;
pub use shipment::*;
pub use vessel::*;
pub use viewport::*;
