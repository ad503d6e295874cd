//! Bounded cross-track overlap induction.
//!
//! Takes freshly built tracks and, over a fixed number of random trials,
//! pulls pairs of intervals on different tracks onto a common window.
//! Each merged pair renders as one operation spanning two rows of the chart.
//!
//! # Algorithm
//!
//! Per trial:
//! 1. Pick two distinct tracks (subject, neighbor) and a random subject
//!    interval `[s, e)`.
//! 2. Binary-search the neighbor's boundaries for the first one `>= s`.
//! 3. Accept only if that boundary is the start `n` of a neighbor interval,
//!    `0 < e - n < max_overlap`, the following neighbor interval does not
//!    start before `e`, neither interval took part in an earlier merge, and
//!    `[n, e)` is disjoint from every earlier merge window.
//! 4. On acceptance, set the neighbor's end to `e` and the subject's start to
//!    `n`; both now span `[n, e)`.
//!
//! Failed checks consume the trial without retry, so a run may end with
//! fewer merges than trials, or none at all.
//!
//! # Invariants
//!
//! Since `n >= s`, the subject start only moves forward and cannot collide
//! with its predecessor. The neighbor end only moves up to the next neighbor
//! start. Every track therefore stays sorted and non-overlapping, and
//! interval counts never change.
//!
//! Merged intervals are never touched again and merge windows never overlap
//! each other, so at most two merged intervals cover any point in time.
//!
//! # Complexity
//! O(T (log m + T)) for T trials and m intervals per track.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::models::{Interval, ScheduleInstance, Slice};

/// Why a trial did not produce a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The instance has fewer than two tracks.
    TooFewTracks,
    /// Subject and neighbor are the same track.
    SameTrack,
    /// The subject track holds no intervals.
    EmptySubject,
    /// A track or interval index does not exist.
    NoSuchInterval,
    /// Every neighbor boundary lies before the subject start.
    PastEnd,
    /// The subject start falls inside (or on the end of) a neighbor interval.
    InsideInterval,
    /// The neighbor interval starts at or after the subject end.
    NoOverlap,
    /// The shared window would reach the overlap bound.
    OverlapTooLong,
    /// Another neighbor interval starts before the subject ends.
    ThirdInterval,
    /// The subject or neighbor interval already belongs to an earlier merge.
    AlreadyMerged,
    /// The shared window would overlap the window of an earlier merge.
    WindowConflict,
}

/// An applied merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRecord {
    /// Track whose interval start moved.
    pub subject_track: usize,
    /// Index of the subject interval.
    pub subject_index: usize,
    /// Track whose interval end moved.
    pub neighbor_track: usize,
    /// Index of the neighbor interval.
    pub neighbor_index: usize,
    /// Subject interval before the merge.
    pub subject_before: Interval,
    /// Neighbor interval before the merge.
    pub neighbor_before: Interval,
    /// Window both intervals span after the merge.
    pub window: Interval,
}

impl MergeRecord {
    /// Length of the shared window.
    #[inline]
    pub fn overlap(&self) -> i64 {
        self.window.duration()
    }
}

/// Result of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialOutcome {
    /// The merge passed validation and was applied.
    Merged(MergeRecord),
    /// The trial was discarded without changing the instance.
    Rejected(Rejection),
}

impl TrialOutcome {
    /// The merge, if one was applied.
    pub fn merge(&self) -> Option<&MergeRecord> {
        match self {
            TrialOutcome::Merged(m) => Some(m),
            TrialOutcome::Rejected(_) => None,
        }
    }
}

/// Outcomes of every trial of one induction run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InductionReport {
    /// One entry per trial.
    pub outcomes: Vec<TrialOutcome>,
}

impl InductionReport {
    /// Number of trials run.
    pub fn trial_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Applied merges in trial order.
    pub fn merges(&self) -> impl Iterator<Item = &MergeRecord> {
        self.outcomes.iter().filter_map(TrialOutcome::merge)
    }

    /// Number of applied merges.
    pub fn merge_count(&self) -> usize {
        self.merges().count()
    }

    /// Number of discarded trials.
    pub fn rejection_count(&self) -> usize {
        self.trial_count() - self.merge_count()
    }

    /// Whether interval `index` of `track` took part in a recorded merge.
    pub fn is_merged(&self, track: usize, index: usize) -> bool {
        self.merges().any(|m| {
            (m.subject_track, m.subject_index) == (track, index)
                || (m.neighbor_track, m.neighbor_index) == (track, index)
        })
    }

    fn overlaps_window(&self, window: &Interval) -> bool {
        self.merges().any(|m| m.window.overlaps(window))
    }
}

/// Randomized, validated overlap induction across tracks.
///
/// # Example
///
/// ```
/// use u_gantt::generator::{InductionReport, OverlapInducer};
/// use u_gantt::models::{Interval, ScheduleInstance, Slice};
///
/// let mut instance = ScheduleInstance::from_slices(vec![
///     Slice::from_intervals(vec![Interval::new(0, 59).unwrap()]).unwrap(),
///     Slice::from_intervals(vec![Interval::new(10, 69).unwrap()]).unwrap(),
/// ]);
///
/// let inducer = OverlapInducer::new(10, 96);
/// let outcome = inducer.try_merge(&mut instance, &InductionReport::default(), 0, 0, 1);
/// let merge = outcome.merge().unwrap();
/// assert_eq!(merge.window, Interval::new(10, 59).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapInducer {
    trials: usize,
    max_overlap: i64,
}

impl OverlapInducer {
    /// Creates an inducer running `trials` attempts with shared windows
    /// strictly shorter than `max_overlap`.
    pub fn new(trials: usize, max_overlap: i64) -> Self {
        Self {
            trials,
            max_overlap,
        }
    }

    /// Creates an inducer from the overlap fields of `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.overlap_trials, config.max_overlap)
    }

    /// Trial budget.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Exclusive bound on shared window length.
    #[inline]
    pub fn max_overlap(&self) -> i64 {
        self.max_overlap
    }

    /// Runs every trial against `instance`.
    ///
    /// With a budget of zero the instance is left untouched and no random
    /// numbers are drawn.
    pub fn induce<R: Rng + ?Sized>(
        &self,
        instance: &mut ScheduleInstance,
        rng: &mut R,
    ) -> InductionReport {
        let tracks = instance.track_count();
        let mut report = InductionReport {
            outcomes: Vec::with_capacity(self.trials),
        };

        for _ in 0..self.trials {
            let outcome = if tracks < 2 {
                TrialOutcome::Rejected(Rejection::TooFewTracks)
            } else {
                let picked = index::sample(rng, tracks, 2);
                let (subject_track, neighbor_track) = (picked.index(0), picked.index(1));
                let len = instance.slice(subject_track).map_or(0, Slice::len);
                if len == 0 {
                    TrialOutcome::Rejected(Rejection::EmptySubject)
                } else {
                    let subject_index = rng.random_range(0..len);
                    self.try_merge(
                        instance,
                        &report,
                        subject_track,
                        subject_index,
                        neighbor_track,
                    )
                }
            };
            report.outcomes.push(outcome);
        }

        debug!(
            trials = self.trials,
            merges = report.merge_count(),
            "overlap induction finished"
        );
        report
    }

    /// Runs a single trial on fixed indices.
    ///
    /// This is the deterministic core of [`induce`](Self::induce): validate
    /// the candidate pair, and apply the merge only if every check passes.
    /// `prior` holds the trials already run against `instance`; its merged
    /// intervals and windows are off limits.
    pub fn try_merge(
        &self,
        instance: &mut ScheduleInstance,
        prior: &InductionReport,
        subject_track: usize,
        subject_index: usize,
        neighbor_track: usize,
    ) -> TrialOutcome {
        let checked = self.check(
            instance,
            prior,
            subject_track,
            subject_index,
            neighbor_track,
        );
        let (neighbor_index, subject, neighbor) = match checked {
            Ok(found) => found,
            Err(rejection) => {
                trace!(
                    subject_track,
                    subject_index,
                    neighbor_track,
                    ?rejection,
                    "overlap trial rejected"
                );
                return TrialOutcome::Rejected(rejection);
            }
        };

        debug_assert!(neighbor.start() >= subject.start());
        let window = Interval::spanning(neighbor.start(), subject.end());

        if let Some(iv) = instance
            .slice_mut(neighbor_track)
            .and_then(|s| s.get_mut(neighbor_index))
        {
            iv.set_end(window.end());
        }
        if let Some(iv) = instance
            .slice_mut(subject_track)
            .and_then(|s| s.get_mut(subject_index))
        {
            iv.set_start(window.start());
        }

        debug!(
            subject_track,
            neighbor_track,
            subject = ?subject,
            neighbor = ?neighbor,
            window = ?window,
            "induced overlap"
        );

        TrialOutcome::Merged(MergeRecord {
            subject_track,
            subject_index,
            neighbor_track,
            neighbor_index,
            subject_before: subject,
            neighbor_before: neighbor,
            window,
        })
    }

    /// Validates a candidate pair without touching the instance.
    ///
    /// Returns the neighbor index and both intervals on success.
    fn check(
        &self,
        instance: &ScheduleInstance,
        prior: &InductionReport,
        subject_track: usize,
        subject_index: usize,
        neighbor_track: usize,
    ) -> Result<(usize, Interval, Interval), Rejection> {
        if subject_track == neighbor_track {
            return Err(Rejection::SameTrack);
        }
        let subject = *instance
            .slice(subject_track)
            .and_then(|s| s.get(subject_index))
            .ok_or(Rejection::NoSuchInterval)?;
        if prior.is_merged(subject_track, subject_index) {
            return Err(Rejection::AlreadyMerged);
        }
        let neighbors = instance
            .slice(neighbor_track)
            .ok_or(Rejection::NoSuchInterval)?;

        let boundary = neighbors
            .locate(subject.start())
            .ok_or(Rejection::PastEnd)?;
        if !boundary.is_start() {
            return Err(Rejection::InsideInterval);
        }
        let neighbor = *neighbors
            .get(boundary.index)
            .ok_or(Rejection::NoSuchInterval)?;
        if prior.is_merged(neighbor_track, boundary.index) {
            return Err(Rejection::AlreadyMerged);
        }

        let overlap = subject.end() - neighbor.start();
        if overlap <= 0 {
            return Err(Rejection::NoOverlap);
        }
        if overlap >= self.max_overlap {
            return Err(Rejection::OverlapTooLong);
        }

        if let Some(next) = neighbors.get(boundary.index + 1) {
            if next.start() < subject.end() {
                return Err(Rejection::ThirdInterval);
            }
        }

        if prior.overlaps_window(&Interval::spanning(neighbor.start(), subject.end())) {
            return Err(Rejection::WindowConflict);
        }

        Ok((boundary.index, subject, neighbor))
    }
}
