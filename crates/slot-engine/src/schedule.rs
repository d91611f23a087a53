//! Slot generation pipeline — anchors the weekly pattern, runs the slot
//! arithmetic over each occurrence, and merges the survivors into a
//! date-keyed result.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::anchor::anchor_windows;
use crate::config::AvailabilityConfig;
use crate::slots::{self, TimeSlot};

/// Bookable slots grouped by the calendar date of each slot's start instant.
///
/// A date key is present only if at least one bookable slot starts on that
/// date. Serializes to a JSON object with `YYYY-MM-DD` keys.
pub type SlotsByDate = BTreeMap<NaiveDate, Vec<TimeSlot>>;

/// Compute all bookable slots for the configured horizon.
///
/// For each anchored window occurrence: tile it with candidate slots,
/// subtract the bookings contained in it, drop slots inside the lead-time
/// cutoff, and merge what survives into the result, keyed by the date the
/// slot starts on. Windows left with nothing contribute no date key.
///
/// Pure function of its inputs — `now` is supplied by the caller, never read
/// from a clock, and identical inputs always yield identical output.
pub fn generate_slots(now: NaiveDateTime, config: &AvailabilityConfig) -> SlotsByDate {
    let anchored = anchor_windows(
        now,
        config.calendar_length_days,
        &config.availability_windows,
    );

    anchored.iter().fold(SlotsByDate::new(), |acc, window| {
        let candidates = slots::all_slots(window, config.duration_minutes);
        let bookings = slots::bookings_in_window(window, &config.bookings);
        let available = slots::subtract_bookings(candidates, &bookings);
        let bookable = slots::apply_lead_time(now, available, config.must_book_hours_before);

        if bookable.is_empty() {
            return acc;
        }
        merge_by_date(acc, bookable)
    })
}

/// Merge a window's surviving slots into the accumulated result, appending
/// to any existing list for a date rather than overwriting it. Slots keep
/// their generation order within each date.
fn merge_by_date(mut acc: SlotsByDate, bookable: Vec<TimeSlot>) -> SlotsByDate {
    for slot in bookable {
        acc.entry(slot.from.date()).or_default().push(slot);
    }
    acc
}
