//! Slot arithmetic — the four pure interval operations the orchestrator
//! composes per anchored window.
//!
//! All operations are total: empty input yields empty output, and a window
//! whose end precedes its start simply produces no slots.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::anchor::AnchoredWindow;

/// A concrete time interval.
///
/// Represents candidate slots, bookings, and bookable slots alike — the
/// roles are distinguished by where the value flows, not by its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

/// Tile an anchored window with fixed-length candidate slots.
///
/// Slots run gapless from `window.start`; a trailing partial period shorter
/// than the duration is dropped rather than truncated, so no slot ever
/// exceeds `window.end`.
pub fn all_slots(window: &AnchoredWindow, duration_minutes: u32) -> Vec<TimeSlot> {
    // A zero-length step would never advance the walk below.
    if duration_minutes == 0 {
        return Vec::new();
    }
    let step = Duration::minutes(i64::from(duration_minutes));

    let mut slots = Vec::new();
    let mut from = window.start;
    loop {
        let to = from + step;
        if from >= window.end || to > window.end {
            break;
        }
        slots.push(TimeSlot { from, to });
        from = to;
    }
    slots
}

/// Select the bookings relevant to one anchored window.
///
/// A booking is relevant only when fully contained in the window; a booking
/// extending outside the modeled window cannot affect slots computed for
/// that window alone.
pub fn bookings_in_window(window: &AnchoredWindow, all_bookings: &[TimeSlot]) -> Vec<TimeSlot> {
    all_bookings
        .iter()
        .filter(|booking| booking.from >= window.start && booking.to <= window.end)
        .copied()
        .collect()
}

/// Drop every slot that overlaps any booking.
pub fn subtract_bookings(slots: Vec<TimeSlot>, bookings: &[TimeSlot]) -> Vec<TimeSlot> {
    slots
        .into_iter()
        .filter(|slot| !bookings.iter().any(|booking| overlaps(slot, booking)))
        .collect()
}

/// Drop slots starting before `now + must_book_hours_before`.
///
/// A slot starting exactly at the cutoff is retained.
pub fn apply_lead_time(
    now: NaiveDateTime,
    slots: Vec<TimeSlot>,
    must_book_hours_before: u32,
) -> Vec<TimeSlot> {
    let cutoff = now + Duration::hours(i64::from(must_book_hours_before));
    slots.into_iter().filter(|slot| slot.from >= cutoff).collect()
}

/// Two intervals overlap iff `a.from < b.to && b.from < a.to`.
///
/// This single test covers partial overlap and full containment in either
/// direction. Touching intervals (one ends exactly where the other starts)
/// do NOT overlap.
fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.from < b.to && b.from < a.to
}
