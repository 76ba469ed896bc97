#![deny(rust_2018_idioms)]

pub mod error;
pub mod settings;
pub mod startup;
pub mod tracker;

pub use tracker::FleetTracker;
