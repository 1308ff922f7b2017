//! The `Scheduler` -- an ordered in-memory event collection.
//!
//! Events are admitted one at a time through [`Scheduler::add`], which
//! rejects any candidate overlapping a stored event. The collection is kept
//! sorted by start time on insertion, so reads never mutate state.
//!
//! Single-threaded by design: there is no interior locking, and the
//! check-then-insert sequence in `add` is not atomic. Concurrent callers
//! must wrap the whole `Scheduler` in their own mutual exclusion.

use chrono::{Duration, NaiveDateTime};

use crate::clock::{Clock, SystemClock};
use crate::event::{Event, EventRecord};

/// An in-memory schedule of non-overlapping events.
pub struct Scheduler {
    /// Stored events, always sorted ascending by start time.
    events: Vec<Event>,
    /// Supplies the default reference time for [`Scheduler::suggest_time`].
    clock: Box<dyn Clock>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Create an empty scheduler backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty scheduler with an injected clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            events: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Try to add an event, returning a human-readable status message.
    ///
    /// The candidate is checked against every stored event; the first
    /// overlap aborts the add and names the conflicting event. Conflicts
    /// are ordinary return values, not errors.
    ///
    /// The interval is not validated: a candidate with `start >= end` goes
    /// through the same overlap scan as any other.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> String {
        let candidate = Event::new(title, start, end);

        for event in &self.events {
            // Events are sorted by start; once one starts at or after the
            // candidate's end, no later event can overlap it.
            if event.start >= candidate.end {
                break;
            }
            if event.overlaps(&candidate) {
                return format!(
                    "Conflict with event: {} ({} - {})",
                    event.title, event.start, event.end
                );
            }
        }

        let pos = self.events.partition_point(|e| e.start <= candidate.start);
        self.events.insert(pos, candidate);
        "Event added successfully!".to_string()
    }

    /// Suggest the earliest start time for a slot of `duration_minutes`
    /// beginning no earlier than `after` (defaults to the clock's now).
    ///
    /// Walks the stored events in start order, advancing a cursor past each
    /// busy interval. A slot that ends exactly when the next event starts
    /// counts as free. When every event has been passed, the cursor itself
    /// is returned -- the tail slot after the last event is unbounded.
    pub fn suggest_time(
        &self,
        duration_minutes: i64,
        after: Option<NaiveDateTime>,
    ) -> NaiveDateTime {
        let duration = Duration::minutes(duration_minutes);
        let mut possible_start = after.unwrap_or_else(|| self.clock.now());

        for event in &self.events {
            if possible_start + duration <= event.start {
                return possible_start;
            }
            possible_start = possible_start.max(event.end);
        }
        possible_start
    }

    /// All stored events in ascending start order, flattened to records.
    pub fn list_events(&self) -> Vec<EventRecord> {
        self.events.iter().map(Event::to_record).collect()
    }

    /// The stored events, sorted ascending by start time.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are stored.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
