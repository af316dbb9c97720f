//! Lock-guarded handle to a parking lot.
//!
//! The engine itself does no locking. Transports that serve requests
//! concurrently hold a [`SharedLot`]; every call takes the mutex for exactly one
//! engine operation, so operations never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::ParkingLot;

/// Cloneable, thread-safe handle to a single [`ParkingLot`].
#[derive(Clone, Default)]
pub struct SharedLot {
    inner: Arc<Mutex<ParkingLot>>,
}

impl SharedLot {
    /// Handle to a fresh, uninitialized lot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing lot.
    #[must_use]
    pub fn from_lot(lot: ParkingLot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lot)),
        }
    }

    /// Run `f` with shared access to the lot.
    pub fn read<R>(&self, f: impl FnOnce(&ParkingLot) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Run `f` with exclusive access to the lot.
    pub fn write<R>(&self, f: impl FnOnce(&mut ParkingLot) -> R) -> R {
        f(&mut *self.inner.lock())
    }

    /// Swap in `lot` and return the previous one.
    pub fn replace(&self, lot: ParkingLot) -> ParkingLot {
        std::mem::replace(&mut *self.inner.lock(), lot)
    }

    /// Discard all state, leaving an uninitialized lot with no audit sink.
    pub fn reset(&self) {
        self.replace(ParkingLot::new());
        tracing::debug!("parking lot reset");
    }
}
