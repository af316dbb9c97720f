//! Tests for audit sinks

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use parking_slots::core::{
    AuditAction, AuditSink, InMemoryAuditSink, Occupant, ParkingLot, TracingAuditSink,
    build_audit_event,
};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(AuditAction::Allocate, Some(1), Some("KA-01"), 3);
    sink.record(event, &[]);
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].action, AuditAction::Allocate);
    assert_eq!(events[0].slot, Some(1));
    assert_eq!(events[0].key.as_deref(), Some("KA-01"));
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(AuditAction::Initialize, None, None, 2), &[]);
    sink.record(build_audit_event(AuditAction::Allocate, Some(1), Some("A"), 2), &[]);
    sink.record(build_audit_event(AuditAction::Release, Some(1), Some("A"), 2), &[]);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, AuditAction::Allocate); // First one popped
    assert_eq!(events[1].action, AuditAction::Release);
}

#[test]
fn test_build_audit_event() {
    let a = build_audit_event(AuditAction::Expand, None, None, 5);
    let b = build_audit_event(AuditAction::Expand, None, None, 5);

    assert_eq!(a.capacity, 5);
    assert_eq!(a.slot, None);
    assert!(a.created_at_ms > 0);
    assert_ne!(a.event_id, b.event_id);
}

#[test]
fn test_lot_records_only_successful_mutations() {
    let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(16)));
    let mut lot = ParkingLot::new().with_audit(Box::new(Arc::clone(&sink)));

    lot.initialize(1).unwrap();
    lot.allocate(Occupant::new("A", "red")).unwrap();
    assert!(lot.allocate(Occupant::new("B", "red")).is_err());
    assert!(lot.release_by_slot(9).is_err());
    lot.expand(1).unwrap();
    lot.release_by_occupant_key("A").unwrap();
    lot.list_occupied().unwrap();

    let actions: Vec<_> = sink.lock().events().iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Initialize,
            AuditAction::Allocate,
            AuditAction::Expand,
            AuditAction::Release,
        ]
    );
    let events = sink.lock().events();
    assert_eq!(events[1].slot, Some(1));
    assert_eq!(events[2].capacity, 2);
    assert_eq!(events[3].key.as_deref(), Some("A"));
}

#[test]
fn test_tracing_sink_logs_each_mutation_once() {
    let captured = CapturedLog::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut lot = ParkingLot::new().with_audit(Box::new(TracingAuditSink::new(false)));
        lot.initialize(2).unwrap();
        lot.allocate(Occupant::new("A", "red")).unwrap();
        lot.release_by_occupant_key("A").unwrap();
    });

    let output = String::from_utf8(captured.0.lock().clone()).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 3, "{output}");
    assert!(lines.iter().all(|line| line.contains("parking lot mutation")));
}
