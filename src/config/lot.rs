//! Lot configuration structure and loaders.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the initial slot count.
pub const ENV_INITIAL_SLOTS: &str = "PARKING_INITIAL_SLOTS";
/// Environment variable toggling per-mutation logging.
pub const ENV_LOG_MUTATIONS: &str = "PARKING_LOG_MUTATIONS";
/// Environment variable toggling the slot table dump.
pub const ENV_DUMP_SLOT_TABLE: &str = "PARKING_DUMP_SLOT_TABLE";

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON input could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// An environment value could not be interpreted.
    #[error("invalid value `{value}` for {key}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Raw value.
        value: String,
    },
    /// A parsed value violates a constraint.
    #[error("{0}")]
    Invalid(String),
}

/// Lot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// Slots to create at startup. `None` leaves the lot uninitialized so the
    /// first client call decides the size.
    pub initial_slots: Option<usize>,
    /// Log every successful mutation through `tracing`.
    pub log_mutations: bool,
    /// Also log the full slot table after each mutation (needs `log_mutations`).
    pub dump_slot_table: bool,
}

impl LotConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Rejects `initial_slots = 0` and a table dump without mutation logging.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_slots == Some(0) {
            return Err(ConfigError::Invalid(
                "initial_slots must be greater than 0".into(),
            ));
        }
        if self.dump_slot_table && !self.log_mutations {
            return Err(ConfigError::Invalid(
                "dump_slot_table requires log_mutations".into(),
            ));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or a validation error.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(input)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading `.env` first
    /// if one is present.
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable values or a failed validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable values or a failed validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_INITIAL_SLOTS) {
            let slots = raw.trim().parse().map_err(|_| invalid_value(ENV_INITIAL_SLOTS, &raw))?;
            cfg.initial_slots = Some(slots);
        }
        if let Some(raw) = lookup(ENV_LOG_MUTATIONS) {
            cfg.log_mutations = parse_flag(ENV_LOG_MUTATIONS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_DUMP_SLOT_TABLE) {
            cfg.dump_slot_table = parse_flag(ENV_DUMP_SLOT_TABLE, &raw)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid_value(key, raw)),
    }
}

fn invalid_value(key: &str, raw: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_owned(),
        value: raw.to_owned(),
    }
}
