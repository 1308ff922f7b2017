//! # agenda-core
//!
//! Minimal in-memory event scheduling: store time-bounded events, reject
//! additions that overlap an existing event, and suggest the earliest free
//! slot of a given duration after a reference time.
//!
//! Timestamps are naive local [`chrono::NaiveDateTime`] values -- there is no
//! timezone handling, no recurrence, and no persistence. Everything lives in
//! a single in-process [`Scheduler`].
//!
//! ## Modules
//!
//! - [`event`] — `Event` value type with the pairwise overlap predicate
//! - [`scheduler`] — `Scheduler`: add with conflict rejection, listing, slot suggestion
//! - [`slots`] — Windowed free-slot computation over raw event lists
//! - [`clock`] — Injectable "now" provider (system clock or fixed time)
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod scheduler;
pub mod slots;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AgendaError;
pub use event::{Event, EventRecord};
pub use scheduler::Scheduler;
pub use slots::{find_free_slots, first_free_slot, FreeSlot};
