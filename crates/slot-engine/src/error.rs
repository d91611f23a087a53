//! Error types for slot-engine operations.
//!
//! The generation pipeline itself is total — empty availability, fully booked
//! windows, and zero-length horizons all produce empty results, never errors.
//! Only the input boundary (configuration loading, time-zone resolution) can
//! fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The configuration string was not valid JSON for [`AvailabilityConfig`].
    ///
    /// [`AvailabilityConfig`]: crate::config::AvailabilityConfig
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The configuration's `timezone` field is not a valid IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SlotError>;
