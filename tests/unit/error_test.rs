//! Tests for error types

use parking_slots::adapter::ApiError;
use parking_slots::core::{ErrorKind, LotError};

#[test]
fn test_already_initialized_error() {
    let err = LotError::AlreadyInitialized;
    assert_eq!(format!("{}", err), "parking lot already initialized");
    assert_eq!(err.kind(), ErrorKind::AlreadyInitialized);
}

#[test]
fn test_not_initialized_error() {
    let err = LotError::NotInitialized;
    assert_eq!(format!("{}", err), "parking lot not initialized yet");
}

#[test]
fn test_full_error() {
    let err = LotError::Full;
    assert_eq!(format!("{}", err), "parking lot is full");
    assert_eq!(err.kind(), ErrorKind::Full);
}

#[test]
fn test_occupant_not_found_error() {
    let err = LotError::OccupantNotFound("KA-01-AB-1234".to_string());
    assert_eq!(
        format!("{}", err),
        "car with registration number `KA-01-AB-1234` not found"
    );
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_api_error_from_lot_error() {
    let api: ApiError = LotError::SlotNotFound(7).into();
    assert_eq!(api.status, 404);
    assert_eq!(api.kind, ErrorKind::NotFound);
    assert_eq!(api.message, "slot 7 is already free or does not exist");
    assert_eq!(api.to_string(), api.message);
}
