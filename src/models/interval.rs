//! Interval model.
//!
//! An interval is a half-open time span `[start, end)` on one track.
//! Times are abstract integer ticks.

use serde::{Deserialize, Serialize};

use crate::error::{GanttError, Result};

/// A half-open time span `[start, end)` with `0 <= start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    /// Creates an interval, checking `0 <= start < end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start < 0 {
            return Err(GanttError::invalid_argument(
                "start",
                format!("must be non-negative, got {start}"),
            ));
        }
        if end <= start {
            return Err(GanttError::invalid_argument(
                "end",
                format!("must exceed start {start}, got {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from a start time and a positive duration.
    pub fn with_duration(start: i64, duration: i64) -> Result<Self> {
        Self::new(start, start + duration)
    }

    /// Start time (inclusive).
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `t` lies inside `[start, end)`.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.start <= t && t < self.end
    }

    /// Whether the two spans share at least one tick.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    // Callers uphold `0 <= start < end`.
    pub(crate) fn spanning(start: i64, end: i64) -> Self {
        debug_assert!(0 <= start && start < end);
        Self { start, end }
    }

    pub(crate) fn set_start(&mut self, start: i64) {
        debug_assert!(start < self.end);
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: i64) {
        debug_assert!(self.start < end);
        self.end = end;
    }
}

/// Which side of an interval a boundary sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// The inclusive start of an interval.
    Start,
    /// The exclusive end of an interval.
    End,
}

/// A boundary located by [`Slice::locate`](super::Slice::locate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundary {
    /// Index of the owning interval within its slice.
    pub index: usize,
    /// Start or end of that interval.
    pub kind: BoundaryKind,
}

impl Boundary {
    /// Whether this is an interval start.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == BoundaryKind::Start
    }
}
