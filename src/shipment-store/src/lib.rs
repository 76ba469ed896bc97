#![deny(rust_2018_idioms)]

//! In-process implementation of the remote shipment store.

mod adapter;
mod error;
mod seed;

pub use adapter::MemoryShipmentStore;
pub use error::{Error, Result};
pub use seed::demo_shipments;
