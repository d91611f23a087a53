//! Configuration types and their JSON wire format.
//!
//! An [`AvailabilityConfig`] is the full input to slot generation: the weekly
//! availability pattern, the horizon length, the slot duration, the lead-time
//! requirement, and the current booking snapshot. Field names follow the
//! established camelCase wire format, with weekdays as ISO numbers
//! (1 = Monday … 7 = Sunday).
//!
//! The `timezone` field is informational: every timestamp in the
//! configuration is already wall-clock time in that zone, and the engine
//! never converts or reinterprets instants. [`AvailabilityConfig::tz`]
//! resolves the field for callers that need to establish "now" themselves.

use chrono::{Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::slots::TimeSlot;

/// A recurring weekly time anchor — a point in the abstract weekly cycle,
/// not a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayTime {
    /// Day of the weekly cycle, serialized as 1 = Monday … 7 = Sunday.
    #[serde(with = "iso_weekday")]
    pub weekday: Weekday,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

impl WeekdayTime {
    /// Offset of this anchor from the start of its day.
    pub(crate) fn offset_into_day(&self) -> Duration {
        Duration::hours(i64::from(self.hour)) + Duration::minutes(i64::from(self.minute))
    }
}

/// A recurring weekly interval during which bookings may be scheduled.
///
/// May span a day or week boundary (e.g., Sunday 21:00 to Monday 01:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub from: WeekdayTime,
    pub to: WeekdayTime,
}

/// Full input to slot generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityConfig {
    /// Number of calendar days ahead to generate slots for.
    pub calendar_length_days: u32,
    /// The weekly availability pattern.
    pub availability_windows: Vec<AvailabilityWindow>,
    /// Fixed slot length in minutes.
    pub duration_minutes: u32,
    /// Minimum gap between "now" and a slot's start for it to be bookable.
    #[serde(default)]
    pub must_book_hours_before: u32,
    /// Already-reserved intervals, excluded from the output. Read-only
    /// snapshot supplied by the booking source.
    #[serde(default)]
    pub bookings: Vec<TimeSlot>,
    /// IANA identifier of the zone all timestamps are expressed in.
    pub timezone: String,
}

impl AvailabilityConfig {
    /// Parse a configuration from its JSON wire format.
    ///
    /// # Errors
    /// Returns [`SlotError::JsonParse`] if the string is not valid JSON for
    /// this schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the informational `timezone` field to a [`chrono_tz::Tz`].
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidTimezone`] if the field is not a valid
    /// IANA identifier.
    pub fn tz(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse()
            .map_err(|_| SlotError::InvalidTimezone(self.timezone.clone()))
    }
}

/// Serde adapter for `chrono::Weekday` as an ISO weekday number.
mod iso_weekday {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(weekday.number_from_monday())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        match u32::deserialize(deserializer)? {
            1 => Ok(Weekday::Mon),
            2 => Ok(Weekday::Tue),
            3 => Ok(Weekday::Wed),
            4 => Ok(Weekday::Thu),
            5 => Ok(Weekday::Fri),
            6 => Ok(Weekday::Sat),
            7 => Ok(Weekday::Sun),
            other => Err(de::Error::custom(format!(
                "weekday must be 1-7 (Monday = 1), got {}",
                other
            ))),
        }
    }
}
