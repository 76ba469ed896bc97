#![deny(rust_2018_idioms)]

//! Fleet state for vessels in transit: the vessel store, the derivation of map render layers
//! from it, path generation, and the contract for reconciling remote shipment snapshots.

mod defaults;
mod domain;
mod error;
mod ingest;
mod layers;
mod path;
mod ports;
mod snapshot;
mod store;

#[cfg(feature = "test")]
mod test_helper;

pub use domain::*;
pub use error::*;
pub use ingest::*;
pub use layers::*;
pub use path::*;
pub use ports::*;
pub use snapshot::*;
pub use store::*;
