//! Window anchoring — projects the weekly availability pattern onto concrete
//! calendar dates for the requested horizon.
//!
//! A recurring window like "Tuesday 08:00 – Tuesday 16:00" says nothing about
//! dates; anchoring turns it into one dated occurrence per matching day in
//! the horizon, so that windows spanning midnight (or the Sunday/Monday week
//! boundary) get concrete start and end instants.

use chrono::{Datelike, Days, Duration, NaiveDateTime, NaiveTime};

use crate::config::AvailabilityWindow;

/// One concrete occurrence of an [`AvailabilityWindow`] within the horizon.
///
/// Ephemeral: created fresh per anchoring pass and owned by the pipeline
/// invocation that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredWindow {
    /// The recurring window this occurrence was anchored from.
    pub window: AvailabilityWindow,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Anchor recurring weekly windows to concrete dates.
///
/// For each day offset `i` in `[0, calendar_length_days)`, every window whose
/// `from.weekday` matches that day's weekday yields one [`AnchoredWindow`].
/// A single day may match several windows; each match is emitted, in day
/// order.
///
/// The end date lands `to.weekday.days_since(from.weekday)` days after the
/// start day — a forward wrap in `0..=6`, so a window crossing the week
/// boundary (Sunday → Monday) ends the next day rather than six days in the
/// past.
///
/// # Arguments
/// - `now` -- The instant anchoring starts from; only its date matters.
/// - `calendar_length_days` -- Horizon length in days.
/// - `windows` -- The weekly availability pattern.
pub fn anchor_windows(
    now: NaiveDateTime,
    calendar_length_days: u32,
    windows: &[AvailabilityWindow],
) -> Vec<AnchoredWindow> {
    let mut anchored = Vec::new();

    for i in 0..calendar_length_days {
        let day = now.date() + Days::new(u64::from(i));
        // Anchor from midnight so the hour/minute offsets below land cleanly.
        let day_start = day.and_time(NaiveTime::MIN);

        for window in windows {
            if window.from.weekday != day.weekday() {
                continue;
            }

            let day_offset = window.to.weekday.days_since(window.from.weekday);
            anchored.push(AnchoredWindow {
                window: *window,
                start: day_start + window.from.offset_into_day(),
                end: day_start
                    + Duration::days(i64::from(day_offset))
                    + window.to.offset_into_day(),
            });
        }
    }

    anchored
}
