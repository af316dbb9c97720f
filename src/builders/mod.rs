//! Builders that assemble a ready parking lot from configuration.

pub mod lot_builder;

pub use lot_builder::{build_lot, build_shared_lot, shared_lot_from_env};
