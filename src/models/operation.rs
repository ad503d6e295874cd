//! Emitted operation record.
//!
//! The flat `(track, start, duration)` form handed to a renderer.

use serde::{Deserialize, Serialize};

use super::Interval;

/// One bar of the Gantt chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Operation {
    /// Zero-based track index.
    pub track: usize,
    /// Start time.
    pub start: i64,
    /// Duration (always positive).
    pub duration: i64,
}

impl Operation {
    /// Projects an interval on `track`.
    pub fn from_interval(track: usize, interval: &Interval) -> Self {
        Self {
            track,
            start: interval.start(),
            duration: interval.duration(),
        }
    }

    /// End time (start + duration).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}
