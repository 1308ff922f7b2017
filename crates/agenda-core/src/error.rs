//! Error types for agenda-core operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    /// An event interval whose start does not precede its end.
    ///
    /// Only produced by [`Event::try_new`](crate::Event::try_new);
    /// [`Scheduler::add`](crate::Scheduler::add) deliberately accepts such
    /// intervals and reports conflicts as plain status strings instead.
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

pub type Result<T> = std::result::Result<T, AgendaError>;
