//! Per-track interval sequence construction.
//!
//! # Algorithm
//!
//! For each track, starting from time 0:
//! 1. Advance the cursor by a gap drawn uniformly from the spacing range.
//! 2. Place an interval at the cursor with a duration drawn uniformly from
//!    the duration set.
//! 3. Move the cursor to the interval's end.
//!
//! Since gaps are non-negative every track comes out sorted and
//! non-overlapping.
//!
//! # Complexity
//! O(total operations).

use rand::Rng;
use tracing::debug;

use super::partition::partition_nonneg;
use crate::config::GeneratorConfig;
use crate::error::{GanttError, Result};
use crate::models::{Interval, ScheduleInstance, Slice};

/// Draws the per-track operation counts for `config`.
///
/// Each track receives `min_operations` plus its share of a random total in
/// `[0, extra_operations_max]`, split uniformly over all compositions.
///
/// # Errors
/// `InvalidArgument` if `config.tracks == 0`.
pub fn operation_counts<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let extra = rng.random_range(0..=config.extra_operations_max);
    let counts: Vec<usize> = partition_nonneg(config.tracks, extra, rng)?
        .into_iter()
        .map(|part| part + config.min_operations)
        .collect();
    debug!(extra, ?counts, "drew operation counts");
    Ok(counts)
}

/// Builds non-overlapping interval sequences for each track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceBuilder {
    spacing_min: i64,
    spacing_max: i64,
    durations: Vec<i64>,
}

impl SliceBuilder {
    /// Creates a builder with gaps in `[spacing_min, spacing_max]` and the
    /// given duration set.
    ///
    /// # Errors
    /// `InvalidArgument` if the spacing range is negative or inverted, or if
    /// the duration set is empty or holds a non-positive value.
    pub fn new(spacing_min: i64, spacing_max: i64, durations: Vec<i64>) -> Result<Self> {
        if spacing_min < 0 || spacing_min > spacing_max {
            return Err(GanttError::invalid_argument(
                "spacing",
                format!("range [{spacing_min}, {spacing_max}] must be non-negative and ordered"),
            ));
        }
        if durations.is_empty() {
            return Err(GanttError::invalid_argument("durations", "must not be empty"));
        }
        if let Some(&d) = durations.iter().find(|&&d| d <= 0) {
            return Err(GanttError::invalid_argument(
                "durations",
                format!("must be positive, got {d}"),
            ));
        }
        Ok(Self {
            spacing_min,
            spacing_max,
            durations,
        })
    }

    /// Creates a builder from the spacing and duration fields of `config`.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Self::new(
            config.spacing_min,
            config.spacing_max,
            config.durations.clone(),
        )
    }

    /// Builds one track holding `count` intervals.
    pub fn build_slice<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Slice {
        let mut cursor = 0i64;
        let mut intervals = Vec::with_capacity(count);
        for _ in 0..count {
            cursor += rng.random_range(self.spacing_min..=self.spacing_max);
            let duration = self.durations[rng.random_range(0..self.durations.len())];
            intervals.push(Interval::spanning(cursor, cursor + duration));
            cursor += duration;
        }
        Slice::from_ordered(intervals)
    }

    /// Builds one track per entry of `counts`.
    pub fn build_instance<R: Rng + ?Sized>(
        &self,
        counts: &[usize],
        rng: &mut R,
    ) -> ScheduleInstance {
        ScheduleInstance::from_slices(
            counts
                .iter()
                .map(|&count| self.build_slice(count, rng))
                .collect(),
        )
    }
}
