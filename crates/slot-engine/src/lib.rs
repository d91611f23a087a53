//! # slot-engine
//!
//! Deterministic bookable-slot generation from weekly availability patterns.
//!
//! Given a recurring weekly pattern of availability windows, a fixed slot
//! duration, a snapshot of existing bookings, and a minimum lead time, the
//! engine computes every bookable slot over a rolling calendar horizon and
//! groups the result by date. The whole pipeline is a pure, synchronous
//! function of its inputs: no clock reads, no I/O, no shared state.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{generate_slots, AvailabilityConfig};
//!
//! let config = AvailabilityConfig::from_json(
//!     r#"{
//!         "calendarLengthDays": 1,
//!         "availabilityWindows": [
//!             {"from": {"weekday": 2, "hour": 8}, "to": {"weekday": 2, "hour": 10}}
//!         ],
//!         "durationMinutes": 60,
//!         "mustBookHoursBefore": 1,
//!         "timezone": "Europe/Helsinki"
//!     }"#,
//! )
//! .unwrap();
//!
//! // Tuesday 2023-12-12, 06:30 wall-clock time
//! let now = NaiveDate::from_ymd_opt(2023, 12, 12)
//!     .unwrap()
//!     .and_hms_opt(6, 30, 0)
//!     .unwrap();
//!
//! let slots = generate_slots(now, &config);
//! let date = NaiveDate::from_ymd_opt(2023, 12, 12).unwrap();
//! assert_eq!(slots[&date].len(), 2); // 08:00-09:00 and 09:00-10:00
//! ```
//!
//! ## Modules
//!
//! - [`anchor`] — weekly pattern → concrete dated window occurrences
//! - [`config`] — input types and their JSON wire format
//! - [`schedule`] — the orchestrating pipeline ([`generate_slots`])
//! - [`slots`] — per-window interval arithmetic (tiling, subtraction, lead time)
//! - [`error`] — boundary error types

pub mod anchor;
pub mod config;
pub mod error;
pub mod schedule;
pub mod slots;

pub use anchor::{anchor_windows, AnchoredWindow};
pub use config::{AvailabilityConfig, AvailabilityWindow, WeekdayTime};
pub use error::SlotError;
pub use schedule::{generate_slots, SlotsByDate};
pub use slots::TimeSlot;
