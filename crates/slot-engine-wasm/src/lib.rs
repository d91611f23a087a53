//! WASM bindings for slot-engine.
//!
//! Exposes window anchoring and slot generation to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings; datetimes
//! cross the boundary as `YYYY-MM-DDTHH:MM:SS` wall-clock strings in the
//! configuration's time zone.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDateTime;
use serde::Serialize;
use slot_engine::{AnchoredWindow, AvailabilityConfig, SlotsByDate};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize)]
struct AnchoredWindowDto {
    start: String,
    end: String,
}

impl From<&AnchoredWindow> for AnchoredWindowDto {
    fn from(occurrence: &AnchoredWindow) -> Self {
        Self {
            start: occurrence.start.format(DATETIME_FORMAT).to_string(),
            end: occurrence.end.format(DATETIME_FORMAT).to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a wall-clock datetime string, with or without seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_config(json: &str) -> Result<AvailabilityConfig, JsValue> {
    AvailabilityConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate all bookable slots for a configuration.
///
/// Returns a JSON string mapping `YYYY-MM-DD` date keys to arrays of
/// `{from, to}` objects, ordered by start time within each date.
///
/// # Arguments
/// - `config_json` -- Availability configuration (camelCase wire format)
/// - `now` -- Wall-clock datetime string (e.g., "2023-12-12T06:30:00")
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(config_json: &str, now: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let now = parse_datetime(now)?;

    // The result map serializes to the wire format as-is: `YYYY-MM-DD` keys,
    // `YYYY-MM-DDTHH:MM:SS` timestamps.
    let slots: SlotsByDate = slot_engine::generate_slots(now, &config);
    to_json(&slots)
}

/// Anchor the weekly availability pattern to concrete dates.
///
/// Returns a JSON string containing an array of `{start, end}` objects, one
/// per window occurrence in the horizon, in day order.
///
/// # Arguments
/// - `config_json` -- Availability configuration (camelCase wire format)
/// - `now` -- Wall-clock datetime string (e.g., "2023-12-12T06:30:00")
#[wasm_bindgen(js_name = "anchorWindows")]
pub fn anchor_windows(config_json: &str, now: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let now = parse_datetime(now)?;

    let anchored = slot_engine::anchor_windows(
        now,
        config.calendar_length_days,
        &config.availability_windows,
    );

    let dto: Vec<AnchoredWindowDto> = anchored.iter().map(AnchoredWindowDto::from).collect();
    to_json(&dto)
}
