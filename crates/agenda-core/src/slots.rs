//! Free-slot listing over a bounded window.
//!
//! Where [`Scheduler::suggest_time`](crate::Scheduler::suggest_time) answers
//! "when is the next opening", this module enumerates every opening between
//! `window_start` and `window_end`. It takes a raw event slice rather than a
//! [`Scheduler`](crate::Scheduler), so the input may be unsorted and may
//! contain overlapping events; the walk absorbs both.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::event::Event;

/// A free time slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl FreeSlot {
    fn spanning(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// List the free slots a set of busy events leaves inside the window.
///
/// The same cursor walk as `Scheduler::suggest_time`, restricted to the
/// window: each event in start order either truncates the gap the cursor is
/// sitting in or pushes the cursor forward. Events behind the cursor are
/// skipped, which is what makes overlapping busy periods collapse into one.
///
/// Returns free slots sorted by start time; an empty or inverted window
/// yields no slots.
pub fn find_free_slots(
    events: &[Event],
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Vec<FreeSlot> {
    if window_start >= window_end {
        return Vec::new();
    }

    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|e| e.start);

    let mut slots = Vec::new();
    let mut cursor = window_start;

    for event in ordered {
        if event.start >= window_end {
            // Sorted by start: nothing later reaches into the window either.
            break;
        }
        if event.end <= cursor {
            // Entirely behind the cursor (or before the window).
            continue;
        }
        if event.start > cursor {
            slots.push(FreeSlot::spanning(cursor, event.start));
        }
        cursor = cursor.max(event.end.min(window_end));
    }

    if cursor < window_end {
        slots.push(FreeSlot::spanning(cursor, window_end));
    }

    slots
}

/// The earliest slot in the window that is at least `min_duration_minutes` long.
pub fn first_free_slot(
    events: &[Event],
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    find_free_slots(events, window_start, window_end)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}
