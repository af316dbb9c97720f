//! Tests for builder modules

use parking_slots::builders::{build_lot, build_shared_lot};
use parking_slots::config::LotConfig;
use parking_slots::core::{LotError, Occupant, ParkingLot};

#[test]
fn test_build_lot_defaults() {
    let lot = build_lot(&LotConfig::default()).unwrap();
    assert!(!lot.is_initialized());
}

#[test]
fn test_build_lot_presized() {
    let config = LotConfig {
        initial_slots: Some(4),
        log_mutations: true,
        dump_slot_table: true,
    };

    let mut lot = build_lot(&config).unwrap();
    assert_eq!(lot.capacity(), 4);
    assert_eq!(lot.initialize(2), Err(LotError::AlreadyInitialized));
    assert_eq!(lot.allocate(Occupant::new("A", "red")), Ok(1));
}

#[test]
fn test_build_lot_rejects_invalid_config() {
    let config = LotConfig {
        initial_slots: Some(0),
        ..LotConfig::default()
    };
    assert!(matches!(build_lot(&config), Err(LotError::InvalidArgument(_))));
}

#[test]
fn test_build_shared_lot() {
    let config = LotConfig {
        initial_slots: Some(3),
        ..LotConfig::default()
    };
    let shared = build_shared_lot(&config).unwrap();
    assert_eq!(shared.read(ParkingLot::capacity), 3);
}

#[test]
fn test_shared_lot_from_env_without_variables() {
    // None of the PARKING_* variables are set in the test environment.
    if std::env::vars().any(|(k, _)| k.starts_with("PARKING_")) {
        return;
    }
    let shared = parking_slots::builders::shared_lot_from_env().unwrap();
    assert!(!shared.read(ParkingLot::is_initialized));
}
