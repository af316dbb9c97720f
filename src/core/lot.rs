//! Slot allocation engine.
//!
//! Slots live in a dense vector indexed by `id - 1`, so every lookup is a bounds
//! check and every "first free slot" search is a single forward pass. The pool
//! only grows: `initialize` creates it once and `expand` appends to it.

use std::fmt;

use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::error::LotError;
use crate::core::slot::{Occupant, OccupiedSlot, Slot, SlotId};

/// Owned parking lot state: the slot pool plus an optional audit hook.
#[derive(Default)]
pub struct ParkingLot {
    slots: Vec<Slot>,
    audit: Option<Box<dyn AuditSink>>,
}

impl ParkingLot {
    /// Create an empty, uninitialized lot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Total number of slots ever created.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `initialize` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Number of free slots.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    /// Look up a slot by id.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        id.checked_sub(1).and_then(|idx| self.slots.get(idx))
    }

    /// Iterate over all slots in ascending id order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Create `size` free slots. Allowed once.
    ///
    /// # Errors
    ///
    /// [`LotError::AlreadyInitialized`] if slots already exist,
    /// [`LotError::InvalidArgument`] if `size` is zero or too large to allocate.
    pub fn initialize(&mut self, size: usize) -> Result<usize, LotError> {
        if self.is_initialized() {
            tracing::warn!(size, "rejected initialize: already initialized");
            return Err(LotError::AlreadyInitialized);
        }
        if size == 0 {
            return Err(LotError::invalid("size must be a positive number"));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| exceeds_max_capacity(size))?;
        slots.extend((1..=size).map(Slot::free));
        self.slots = slots;
        tracing::debug!(capacity = size, "parking lot initialized");
        self.record(AuditAction::Initialize, None, None);
        Ok(size)
    }

    /// Append `increment` free slots after the current highest id.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`] before `initialize`,
    /// [`LotError::InvalidArgument`] if `increment` is zero or the grown pool
    /// cannot be allocated.
    pub fn expand(&mut self, increment: usize) -> Result<usize, LotError> {
        self.ensure_initialized()?;
        if increment == 0 {
            return Err(LotError::invalid("increment must be a positive number"));
        }

        let end = self
            .capacity()
            .checked_add(increment)
            .ok_or_else(|| exceeds_max_capacity(increment))?;
        self.slots
            .try_reserve_exact(increment)
            .map_err(|_| exceeds_max_capacity(increment))?;
        self.slots.extend((self.capacity() + 1..=end).map(Slot::free));
        tracing::debug!(increment, capacity = end, "parking lot expanded");
        self.record(AuditAction::Expand, None, None);
        Ok(self.capacity())
    }

    /// Park `occupant` in the lowest-numbered free slot.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`], [`LotError::InvalidArgument`] for an empty
    /// registration, or [`LotError::Full`] when no slot is free.
    pub fn allocate(&mut self, occupant: Occupant) -> Result<SlotId, LotError> {
        self.ensure_initialized()?;
        if occupant.key.is_empty() {
            return Err(LotError::invalid("registration number must not be empty"));
        }
        if self.occupied_count() == self.capacity() {
            tracing::warn!(key = %occupant.key, "rejected allocate: parking lot is full");
            return Err(LotError::Full);
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_occupied())
            .ok_or(LotError::Full)?;
        let id = slot.id();
        tracing::debug!(slot = id, key = %occupant.key, color = %occupant.attribute, "car parked");
        let key = occupant.key.clone();
        slot.park(occupant);
        self.record(AuditAction::Allocate, Some(id), Some(&key));
        Ok(id)
    }

    /// Free slot `id`.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`], or [`LotError::SlotNotFound`] when the slot
    /// is free or outside the pool.
    pub fn release_by_slot(&mut self, id: SlotId) -> Result<SlotId, LotError> {
        self.ensure_initialized()?;
        let car = id
            .checked_sub(1)
            .and_then(|idx| self.slots.get_mut(idx))
            .and_then(Slot::clear)
            .ok_or(LotError::SlotNotFound(id))?;
        tracing::debug!(slot = id, key = %car.key, "slot freed");
        self.record(AuditAction::Release, Some(id), Some(&car.key));
        Ok(id)
    }

    /// Free the lowest-numbered slot holding registration `key` (exact match).
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`], or [`LotError::OccupantNotFound`] when no
    /// occupied slot carries `key`.
    pub fn release_by_occupant_key(&mut self, key: &str) -> Result<SlotId, LotError> {
        self.ensure_initialized()?;
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.occupant().is_some_and(|car| car.key == key))
            .ok_or_else(|| LotError::OccupantNotFound(key.to_owned()))?;
        slot.clear();
        let id = slot.id();
        tracing::debug!(slot = id, key, "slot freed by registration");
        self.record(AuditAction::Release, Some(id), Some(key));
        Ok(id)
    }

    /// All occupied slots in ascending id order.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`].
    pub fn list_occupied(&self) -> Result<Vec<OccupiedSlot>, LotError> {
        self.ensure_initialized()?;
        Ok(self.slots.iter().filter_map(OccupiedSlot::from_slot).collect())
    }

    /// Registrations of parked cars whose color matches `attribute`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`].
    pub fn occupant_keys_by_attribute(&self, attribute: &str) -> Result<Vec<String>, LotError> {
        Ok(self
            .matching(attribute)?
            .map(|(_, car)| car.key.clone())
            .collect())
    }

    /// Slot ids, as text, of parked cars whose color matches `attribute`.
    ///
    /// # Errors
    ///
    /// [`LotError::NotInitialized`].
    pub fn slot_ids_by_attribute(&self, attribute: &str) -> Result<Vec<String>, LotError> {
        Ok(self
            .matching(attribute)?
            .map(|(id, _)| id.to_string())
            .collect())
    }

    fn matching<'a>(
        &'a self,
        attribute: &'a str,
    ) -> Result<impl Iterator<Item = (SlotId, &'a Occupant)> + 'a, LotError> {
        self.ensure_initialized()?;
        Ok(self.slots.iter().filter_map(move |slot| {
            slot.occupant()
                .filter(|car| car.attribute_matches(attribute))
                .map(|car| (slot.id(), car))
        }))
    }

    fn ensure_initialized(&self) -> Result<(), LotError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(LotError::NotInitialized)
        }
    }

    fn record(&mut self, action: AuditAction, slot: Option<SlotId>, key: Option<&str>) {
        if let Some(sink) = self.audit.as_mut() {
            let event = build_audit_event(action, slot, key, self.slots.len());
            sink.record(event, &self.slots);
        }
    }
}

fn exceeds_max_capacity(requested: usize) -> LotError {
    tracing::warn!(requested, "rejected resize: exceeds maximum capacity");
    LotError::invalid(format!("{requested} slots exceeds maximum capacity"))
}

impl fmt::Display for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parking slots")?;
        for slot in &self.slots {
            writeln!(f, "{slot}")?;
        }
        Ok(())
    }
}
