//! Slice (track) model.
//!
//! A slice is one parallel resource timeline: an ordered sequence of
//! intervals where each interval ends no later than the next one starts.

use serde::{Deserialize, Serialize};

use super::{Boundary, BoundaryKind, Interval};
use crate::error::{GanttError, Result};

/// An ordered, non-overlapping sequence of intervals on one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slice {
    intervals: Vec<Interval>,
}

impl Slice {
    /// Creates an empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slice from intervals that are already ordered.
    ///
    /// Fails if any interval starts before its predecessor ends.
    pub fn from_intervals(intervals: Vec<Interval>) -> Result<Self> {
        let slice = Self { intervals };
        if !slice.is_ordered() {
            return Err(GanttError::invalid_argument(
                "intervals",
                "must be sorted and pairwise non-overlapping",
            ));
        }
        Ok(slice)
    }

    pub(crate) fn from_ordered(intervals: Vec<Interval>) -> Self {
        let slice = Self { intervals };
        debug_assert!(slice.is_ordered());
        slice
    }

    /// Appends an interval at the back.
    ///
    /// Fails if it would start before the current last interval ends.
    pub fn push(&mut self, interval: Interval) -> Result<()> {
        if let Some(last) = self.intervals.last() {
            if interval.start() < last.end() {
                return Err(GanttError::invalid_argument(
                    "interval",
                    format!(
                        "starts at {} before the previous interval ends at {}",
                        interval.start(),
                        last.end()
                    ),
                ));
            }
        }
        self.intervals.push(interval);
        Ok(())
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the slice holds no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.intervals.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Interval> {
        self.intervals.get_mut(index)
    }

    /// All intervals in order.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterates intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Whether `interval[i].end <= interval[i + 1].start` holds throughout.
    pub fn is_ordered(&self) -> bool {
        self.intervals.windows(2).all(|w| w[0].end() <= w[1].start())
    }

    /// Sum of interval durations.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.duration()).sum()
    }

    /// End of the last interval (0 when empty).
    pub fn horizon(&self) -> i64 {
        self.intervals.last().map(|iv| iv.end()).unwrap_or(0)
    }

    /// Finds the first boundary at or after `t`.
    ///
    /// Boundaries are the slice's starts and ends read in time order
    /// (`s0, e0, s1, e1, ...`). Returns `None` when every boundary lies
    /// before `t`. A result of kind [`BoundaryKind::End`] means `t` falls
    /// inside that interval or exactly on its end.
    ///
    /// # Complexity
    /// O(log n) binary search; requires [`is_ordered`](Self::is_ordered).
    ///
    /// # Example
    ///
    /// ```
    /// use u_gantt::models::{BoundaryKind, Interval, Slice};
    ///
    /// let slice = Slice::from_intervals(vec![
    ///     Interval::new(10, 69).unwrap(),
    ///     Interval::new(80, 140).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let b = slice.locate(0).unwrap();
    /// assert_eq!((b.index, b.kind), (0, BoundaryKind::Start));
    ///
    /// let b = slice.locate(30).unwrap();
    /// assert_eq!((b.index, b.kind), (0, BoundaryKind::End));
    ///
    /// assert!(slice.locate(141).is_none());
    /// ```
    pub fn locate(&self, t: i64) -> Option<Boundary> {
        let index = self.intervals.partition_point(|iv| iv.end() < t);
        let interval = self.intervals.get(index)?;
        let kind = if interval.start() >= t {
            BoundaryKind::Start
        } else {
            BoundaryKind::End
        };
        Some(Boundary { index, kind })
    }
}

impl<'a> IntoIterator for &'a Slice {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn sample_slice() -> Slice {
        Slice::from_intervals(vec![iv(5, 60), iv(60, 120), iv(130, 200)]).unwrap()
    }

    #[test]
    fn test_from_intervals_rejects_overlap() {
        assert!(Slice::from_intervals(vec![iv(0, 50), iv(49, 80)]).is_err());
        assert!(Slice::from_intervals(vec![iv(0, 50), iv(50, 80)]).is_ok());
    }

    #[test]
    fn test_push_keeps_order() {
        let mut s = Slice::new();
        s.push(iv(0, 10)).unwrap();
        s.push(iv(10, 20)).unwrap();
        assert!(s.push(iv(15, 30)).is_err());
        assert_eq!(s.len(), 2);
        assert!(s.is_ordered());
    }

    #[test]
    fn test_busy_time_and_horizon() {
        let s = sample_slice();
        assert_eq!(s.busy_time(), 55 + 60 + 70);
        assert_eq!(s.horizon(), 200);
        assert_eq!(Slice::new().horizon(), 0);
    }

    #[test]
    fn test_locate_before_first_start() {
        let b = sample_slice().locate(0).unwrap();
        assert_eq!(
            b,
            Boundary {
                index: 0,
                kind: BoundaryKind::Start,
            }
        );
    }

    #[test]
    fn test_locate_exact_start_is_start() {
        let b = sample_slice().locate(130).unwrap();
        assert_eq!(
            b,
            Boundary {
                index: 2,
                kind: BoundaryKind::Start,
            }
        );
    }

    #[test]
    fn test_locate_inside_interval_is_end() {
        let b = sample_slice().locate(100).unwrap();
        assert_eq!(
            b,
            Boundary {
                index: 1,
                kind: BoundaryKind::End,
            }
        );
    }

    #[test]
    fn test_locate_touching_boundaries_picks_end() {
        // 60 is both the end of interval 0 and the start of interval 1.
        let b = sample_slice().locate(60).unwrap();
        assert_eq!(
            b,
            Boundary {
                index: 0,
                kind: BoundaryKind::End,
            }
        );
    }

    #[test]
    fn test_locate_in_gap() {
        let b = sample_slice().locate(125).unwrap();
        assert!(b.is_start());
        assert_eq!(b.index, 2);
    }

    #[test]
    fn test_locate_past_end() {
        assert!(sample_slice().locate(200).is_some());
        assert!(sample_slice().locate(201).is_none());
        assert!(Slice::new().locate(0).is_none());
    }
}
