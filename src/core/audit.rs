//! Audit sink implementations.
//!
//! A sink attached to a [`ParkingLot`](crate::core::ParkingLot) receives one event
//! per successful mutation. Rejected operations never reach the sink.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::slot::{Slot, SlotId};
use crate::util::clock::now_ms;

/// Mutation recorded by an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Pool created.
    Initialize,
    /// Slots appended.
    Expand,
    /// Vehicle parked.
    Allocate,
    /// Slot freed.
    Release,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Action taken.
    pub action: AuditAction,
    /// Slot touched by allocate/release.
    pub slot: Option<SlotId>,
    /// Registration involved in allocate/release.
    pub key: Option<String>,
    /// Capacity after the mutation.
    pub capacity: usize,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event along with the slot table as it stands afterwards.
    fn record(&mut self, event: AuditEvent, slots: &[Slot]);
}

/// Shared sinks let the caller keep a handle and inspect events after the
/// lot has taken ownership of its copy.
impl<S: AuditSink> AuditSink for Arc<Mutex<S>> {
    fn record(&mut self, event: AuditEvent, slots: &[Slot]) {
        self.lock().record(event, slots);
    }
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent, _slots: &[Slot]) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink that logs every mutation through `tracing`.
///
/// With `dump_table` set, the full slot table is logged at debug level after
/// each event.
pub struct TracingAuditSink {
    dump_table: bool,
}

impl TracingAuditSink {
    /// Create a tracing sink.
    #[must_use]
    pub const fn new(dump_table: bool) -> Self {
        Self { dump_table }
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent, slots: &[Slot]) {
        tracing::info!(
            event_id = %event.event_id,
            action = ?event.action,
            slot = ?event.slot,
            key = ?event.key,
            capacity = event.capacity,
            "parking lot mutation"
        );
        if self.dump_table {
            tracing::debug!("parking slots");
            for slot in slots {
                tracing::debug!("{slot}");
            }
        }
    }
}

/// Helper to build an audit event with a fresh id and timestamp.
pub fn build_audit_event(
    action: AuditAction,
    slot: Option<SlotId>,
    key: Option<&str>,
    capacity: usize,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        action,
        slot,
        key: key.map(str::to_owned),
        capacity,
        created_at_ms: now_ms(),
    }
}
