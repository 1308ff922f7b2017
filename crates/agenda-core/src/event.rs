//! The `Event` value type -- a named, half-open time interval `[start, end)`.
//!
//! Adjacent events (where one ends exactly when another starts) do NOT
//! overlap; the comparison is strict on both sides.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// ISO-8601 layout used for serialized timestamps (naive, no offset).
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A titled time interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// An [`Event`] flattened to plain string fields for external output.
///
/// `start` and `end` are ISO-8601 strings without a timezone offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub start: String,
    pub end: String,
}

impl Event {
    /// Create an event without validating the interval.
    ///
    /// `start >= end` is accepted here; the overlap comparison is applied to
    /// such intervals exactly as written, so a zero-width event strictly
    /// inside another interval still overlaps it. Use [`Event::try_new`] to
    /// reject degenerate intervals instead.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
        }
    }

    /// Create an event, failing when `start >= end`.
    ///
    /// # Errors
    /// Returns [`AgendaError::InvalidInterval`] when the start does not
    /// strictly precede the end.
    pub fn try_new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        if start >= end {
            return Err(AgendaError::InvalidInterval { start, end });
        }
        Ok(Self::new(title, start, end))
    }

    /// Whether this event shares any interior instant with `other`.
    ///
    /// Two intervals overlap iff `self.start < other.end && self.end > other.start`.
    /// This excludes the adjacent case where one ends exactly when the other starts.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Flatten to an [`EventRecord`] with ISO-8601 timestamp strings.
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            title: self.title.clone(),
            start: self.start.format(ISO_FORMAT).to_string(),
            end: self.end.format(ISO_FORMAT).to_string(),
        }
    }
}
