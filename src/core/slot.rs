//! Slot and occupant records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based slot identifier.
pub type SlotId = usize;

/// Vehicle parked in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Registration number; matched exactly on release.
    pub key: String,
    /// Color; matched case-insensitively by the filter queries.
    pub attribute: String,
}

impl Occupant {
    /// Build an occupant from registration and color.
    pub fn new(key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attribute: attribute.into(),
        }
    }

    pub(crate) fn attribute_matches(&self, attribute: &str) -> bool {
        self.attribute.to_lowercase() == attribute.to_lowercase()
    }
}

/// A single addressable slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    occupant: Option<Occupant>,
}

impl Slot {
    pub(crate) const fn free(id: SlotId) -> Self {
        Self { id, occupant: None }
    }

    /// Slot identifier.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Whether a vehicle currently holds the slot.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Current occupant, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }

    pub(crate) fn park(&mut self, occupant: Occupant) {
        self.occupant = Some(occupant);
    }

    pub(crate) fn clear(&mut self) -> Option<Occupant> {
        self.occupant.take()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(car) => write!(
                f,
                "Slot {}: Car - Registration No: {}, Color: {}",
                self.id, car.key, car.attribute
            ),
            None => write!(f, "Slot {}: Empty", self.id),
        }
    }
}

/// Row returned by the occupancy listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedSlot {
    /// Slot identifier.
    pub slot_no: SlotId,
    /// Occupant registration.
    pub registration_no: String,
    /// Occupant color.
    pub color: String,
}

impl OccupiedSlot {
    pub(crate) fn from_slot(slot: &Slot) -> Option<Self> {
        slot.occupant().map(|car| Self {
            slot_no: slot.id,
            registration_no: car.key.clone(),
            color: car.attribute.clone(),
        })
    }
}
