//! Schedule instance model.
//!
//! A fixed number of slices, one per resource track. The track count is
//! decided at construction and never changes.

use serde::{Deserialize, Serialize};

use super::Slice;

/// A fixed-size collection of slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInstance {
    slices: Vec<Slice>,
}

impl ScheduleInstance {
    /// Creates an instance with `tracks` empty slices.
    pub fn new(tracks: usize) -> Self {
        Self {
            slices: vec![Slice::new(); tracks],
        }
    }

    /// Creates an instance from prebuilt slices.
    pub fn from_slices(slices: Vec<Slice>) -> Self {
        Self { slices }
    }

    /// Number of tracks.
    #[inline]
    pub fn track_count(&self) -> usize {
        self.slices.len()
    }

    /// Slice for `track`.
    #[inline]
    pub fn slice(&self, track: usize) -> Option<&Slice> {
        self.slices.get(track)
    }

    pub(crate) fn slice_mut(&mut self, track: usize) -> Option<&mut Slice> {
        self.slices.get_mut(track)
    }

    /// All slices in track order.
    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Total interval count across all tracks.
    pub fn operation_count(&self) -> usize {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Interval count per track.
    pub fn operation_counts(&self) -> Vec<usize> {
        self.slices.iter().map(Slice::len).collect()
    }

    /// Latest interval end across all tracks (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(Slice::horizon).max().unwrap_or(0)
    }

    /// Whether every slice is sorted and non-overlapping.
    pub fn is_ordered(&self) -> bool {
        self.slices.iter().all(Slice::is_ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_new_instance_is_empty() {
        let inst = ScheduleInstance::new(3);
        assert_eq!(inst.track_count(), 3);
        assert_eq!(inst.operation_count(), 0);
        assert_eq!(inst.makespan(), 0);
        assert!(inst.slice(3).is_none());
    }

    #[test]
    fn test_counts_and_makespan() {
        let inst = ScheduleInstance::from_slices(vec![
            Slice::from_intervals(vec![iv(0, 59), iv(61, 120)]).unwrap(),
            Slice::from_intervals(vec![iv(10, 69)]).unwrap(),
        ]);
        assert_eq!(inst.operation_counts(), vec![2, 1]);
        assert_eq!(inst.operation_count(), 3);
        assert_eq!(inst.makespan(), 120);
        assert!(inst.is_ordered());
    }
}
