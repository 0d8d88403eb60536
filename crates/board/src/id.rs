//! Task identifiers and their generator.
//!
//! Identifiers are derived from the creation timestamp (milliseconds since
//! the Unix epoch), but the generator never hands out the same value twice:
//! when two tasks are created within the same clock tick, the second one
//! gets the previous identifier plus one.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unique identifier for a task or to-do item.
///
/// # Examples
///
/// ```
/// use tareas_board::TaskId;
///
/// let id = TaskId::from_raw(1_700_000_000_000);
/// assert_eq!(id.get(), 1_700_000_000_000);
/// assert_eq!(id.to_string(), "1700000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of "now" for the generator, in milliseconds.
pub type Clock = fn() -> u64;

/// Reads the wall clock in milliseconds since the Unix epoch.
///
/// Clocks set before the epoch read as zero.
#[must_use]
pub fn wall_clock_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Generates strictly increasing, timestamp-derived identifiers.
///
/// Each identifier is `max(now, previous + 1)`, so identifiers stay close to
/// the creation time while remaining unique even if the clock stalls or
/// goes backwards.
///
/// # Examples
///
/// ```
/// use tareas_board::IdGenerator;
///
/// // A clock that never advances still yields unique ids.
/// let mut ids = IdGenerator::with_clock(|| 42);
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert_eq!(a.get(), 42);
/// assert_eq!(b.get(), 43);
/// ```
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: Clock,
    last: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Creates a generator backed by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(wall_clock_millis)
    }

    /// Creates a generator backed by a custom clock.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self { clock, last: None }
    }

    /// Returns the next identifier.
    pub fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) => now.max(last.saturating_add(1)),
            None => now,
        };
        self.last = Some(id);
        TaskId(id)
    }

    /// Makes sure future identifiers are greater than `id`.
    ///
    /// Used when tasks created elsewhere are handed to a collection that
    /// owns this generator.
    pub fn observe(&mut self, id: TaskId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }
}
