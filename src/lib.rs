//! # Parking Slots
//!
//! A slot allocation engine for a numbered, growable parking pool.
//!
//! The lot starts empty, is sized once with [`ParkingLot::initialize`], and can
//! only grow afterwards through [`ParkingLot::expand`]. Every incoming car is
//! assigned the **lowest-numbered free slot**; cars leave by slot number or by
//! registration, and the occupancy can be queried by color.
//!
//! ## Layout
//!
//! - [`core`]: the engine ([`ParkingLot`]), slot records, errors, and the
//!   optional audit hook that observes mutations.
//! - [`config`]: [`LotConfig`](config::LotConfig), loadable from JSON or from
//!   `PARKING_*` environment variables (with `.env` support).
//! - [`builders`]: turn a configuration into a ready lot.
//! - [`adapter`]: request/response models for a transport layer plus
//!   [`SharedLot`](adapter::SharedLot), the lock that serializes access when
//!   requests arrive concurrently.
//! - [`util`]: tracing setup and clock helpers.
//!
//! ## Example
//!
//! ```
//! use parking_slots::core::{LotError, Occupant, ParkingLot};
//!
//! let mut lot = ParkingLot::new();
//! lot.initialize(2)?;
//! assert_eq!(lot.allocate(Occupant::new("REG-1", "white"))?, 1);
//! assert_eq!(lot.allocate(Occupant::new("REG-2", "black"))?, 2);
//! assert_eq!(lot.allocate(Occupant::new("REG-3", "red")), Err(LotError::Full));
//!
//! lot.release_by_slot(1)?;
//! assert_eq!(lot.allocate(Occupant::new("REG-3", "red"))?, 1);
//! assert_eq!(lot.slot_ids_by_attribute("RED")?, vec!["1".to_string()]);
//! # Ok::<(), LotError>(())
//! ```
//!
//! For complete scenarios, see `tests/allocation_algorithm_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Slot allocation engine, slot records, errors, and audit hook.
pub mod core;
/// Configuration models and loaders.
pub mod config;
/// Builders to construct lots from configuration.
pub mod builders;
/// Transport-neutral request/response layer and shared handle.
pub mod adapter;
/// Shared utilities.
pub mod util;

pub use crate::core::{LotError, Occupant, ParkingLot};
