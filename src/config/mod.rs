//! Configuration models for the parking lot.

pub mod lot;

pub use lot::{ConfigError, LotConfig};
