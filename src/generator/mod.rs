//! Timeline generation pipeline.
//!
//! Four phases, run strictly in order and never re-entered:
//!
//! 1. **Partition** ([`partition_nonneg`], [`operation_counts`]): split a
//!    random total into per-track operation counts.
//! 2. **Build** ([`SliceBuilder`]): lay out non-overlapping intervals per track.
//! 3. **Induce** ([`OverlapInducer`]): merge a bounded number of interval
//!    pairs across tracks onto shared windows.
//! 4. **Emit** ([`ScheduleEmitter`]): flatten and shuffle into operations.
//!
//! [`ScheduleGenerator`] wires the phases together. Every phase takes the
//! random generator as an argument; nothing reads global state, so a seed
//! fully determines the output.
//!
//! Induction validates and then mutates without any locking. That is sound
//! only because a run is single-threaded and holds `&mut` on the instance.

mod builder;
mod emitter;
mod overlap;
mod partition;
mod pipeline;

pub use builder::{operation_counts, SliceBuilder};
pub use emitter::ScheduleEmitter;
pub use overlap::{InductionReport, MergeRecord, OverlapInducer, Rejection, TrialOutcome};
pub use partition::{partition_nonneg, partition_pos};
pub use pipeline::{GeneratedSchedule, ScheduleGenerator};
