//! Build parking lots from configuration.

use anyhow::Context;

use crate::adapter::SharedLot;
use crate::config::LotConfig;
use crate::core::{AppResult, LotError, ParkingLot, TracingAuditSink};

/// Build a lot from configuration: attach the tracing sink when mutation
/// logging is on, then pre-size the pool if `initial_slots` is set.
///
/// # Errors
///
/// Returns [`LotError::InvalidArgument`] for a configuration that fails
/// validation.
pub fn build_lot(cfg: &LotConfig) -> Result<ParkingLot, LotError> {
    cfg.validate()
        .map_err(|e| LotError::InvalidArgument(format!("config invalid: {e}")))?;

    let mut lot = ParkingLot::new();
    if cfg.log_mutations {
        lot = lot.with_audit(Box::new(TracingAuditSink::new(cfg.dump_slot_table)));
    }
    if let Some(size) = cfg.initial_slots {
        lot.initialize(size)?;
    }
    Ok(lot)
}

/// Same as [`build_lot`], wrapped in a [`SharedLot`] for adapter use.
///
/// # Errors
///
/// See [`build_lot`].
pub fn build_shared_lot(cfg: &LotConfig) -> Result<SharedLot, LotError> {
    build_lot(cfg).map(SharedLot::from_lot)
}

/// Load [`LotConfig`] from the environment (and `.env`) and build a shared lot.
///
/// # Errors
///
/// Fails if the environment holds invalid `PARKING_*` values.
pub fn shared_lot_from_env() -> AppResult<SharedLot> {
    let cfg = LotConfig::from_env().context("loading parking lot config from environment")?;
    tracing::debug!(?cfg, "building parking lot");
    let lot = build_shared_lot(&cfg).context("building parking lot")?;
    Ok(lot)
}
