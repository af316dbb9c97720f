//! API-facing request/response models and dispatch.
//!
//! Each function performs one engine operation under the [`SharedLot`] lock and
//! shapes the result the way an HTTP layer returns it. Sizes and slot numbers
//! arrive as signed integers so that zero or negative values become
//! `invalid_argument` / `not_found` errors rather than decode failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapter::SharedLot;
use crate::core::{ErrorKind, LotError, Occupant, OccupiedSlot, ParkingLot, SlotId};

/// Create the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeRequest {
    /// Number of slots.
    pub no_of_slot: i64,
}

/// Grow the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandRequest {
    /// Slots to append.
    pub increment_slot: i64,
}

/// Park a car.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkRequest {
    /// Registration number.
    pub car_reg_no: String,
    /// Car color.
    pub car_color: String,
}

/// Free a slot, selected by exactly one of the two fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearRequest {
    /// Slot to free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_number: Option<i64>,
    /// Registration whose slot to free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_registration_no: Option<String>,
}

/// Capacity after initialize/expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalSlotResponse {
    /// Total slots.
    pub total_slot: usize,
}

/// Slot assigned by park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedSlotResponse {
    /// Slot id.
    pub allocated_slot_number: SlotId,
}

/// Slot freed by clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreedSlotResponse {
    /// Slot id.
    pub freed_slot_number: SlotId,
}

/// Error payload with the status a transport should answer with.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Transport status code (400 or 404).
    pub status: u16,
    /// Error classification.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Build an error of `kind` with the status that kind maps to.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            status: kind.status_code(),
            kind,
            message: message.into(),
        }
    }
}

impl From<LotError> for ApiError {
    fn from(err: LotError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

/// Create the pool with `no_of_slot` slots.
///
/// # Errors
///
/// `already_initialized` or `invalid_argument`.
pub fn initialize(lot: &SharedLot, req: &InitializeRequest) -> Result<TotalSlotResponse, ApiError> {
    let size = non_negative(req.no_of_slot);
    let total_slot = lot.write(|lot| lot.initialize(size))?;
    Ok(TotalSlotResponse { total_slot })
}

/// Append `increment_slot` slots.
///
/// # Errors
///
/// `not_initialized` or `invalid_argument`.
pub fn expand(lot: &SharedLot, req: &ExpandRequest) -> Result<TotalSlotResponse, ApiError> {
    let increment = non_negative(req.increment_slot);
    let total_slot = lot.write(|lot| lot.expand(increment))?;
    Ok(TotalSlotResponse { total_slot })
}

/// Park a car in the lowest free slot.
///
/// # Errors
///
/// `not_initialized`, `invalid_argument` for an empty registration, or `full`.
pub fn park(lot: &SharedLot, req: ParkRequest) -> Result<AllocatedSlotResponse, ApiError> {
    let occupant = Occupant::new(req.car_reg_no, req.car_color);
    let allocated_slot_number = lot.write(|lot| lot.allocate(occupant))?;
    Ok(AllocatedSlotResponse {
        allocated_slot_number,
    })
}

/// Free a slot by number or by registration.
///
/// # Errors
///
/// `invalid_argument` unless exactly one selector is given, `not_initialized`,
/// or `not_found`.
pub fn clear(lot: &SharedLot, req: &ClearRequest) -> Result<FreedSlotResponse, ApiError> {
    let registration = req.car_registration_no.as_deref().filter(|r| !r.is_empty());
    let freed_slot_number = match (req.slot_number, registration) {
        (Some(number), None) => lot.write(|lot| match usize::try_from(number) {
            Ok(id) => lot.release_by_slot(id).map_err(ApiError::from),
            Err(_) if !lot.is_initialized() => Err(LotError::NotInitialized.into()),
            // Negative numbers can never name a slot.
            Err(_) => Err(ApiError::new(
                ErrorKind::NotFound,
                format!("slot {number} is already free or does not exist"),
            )),
        }),
        (None, Some(registration)) => lot
            .write(|lot| lot.release_by_occupant_key(registration))
            .map_err(ApiError::from),
        _ => Err(LotError::invalid(
            "exactly one of slot_number or car_registration_no must be provided",
        )
        .into()),
    }?;
    Ok(FreedSlotResponse { freed_slot_number })
}

/// Occupied slots in ascending order.
///
/// # Errors
///
/// `not_initialized`.
pub fn status(lot: &SharedLot) -> Result<Vec<OccupiedSlot>, ApiError> {
    Ok(lot.read(ParkingLot::list_occupied)?)
}

/// Registrations of cars with the given color.
///
/// # Errors
///
/// `not_initialized`.
pub fn registration_numbers(lot: &SharedLot, color: &str) -> Result<Vec<String>, ApiError> {
    Ok(lot.read(|lot| lot.occupant_keys_by_attribute(color))?)
}

/// Slot numbers, as text, of cars with the given color.
///
/// # Errors
///
/// `not_initialized`.
pub fn slot_numbers(lot: &SharedLot, color: &str) -> Result<Vec<String>, ApiError> {
    Ok(lot.read(|lot| lot.slot_ids_by_attribute(color))?)
}

fn non_negative(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}
