//! Slot allocation engine and its supporting types.

pub mod error;
pub mod slot;
pub mod lot;
pub mod audit;

pub use error::{AppResult, ErrorKind, LotError};
pub use slot::{Occupant, OccupiedSlot, Slot, SlotId};
pub use lot::ParkingLot;
pub use audit::{
    AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink, build_audit_event,
};
