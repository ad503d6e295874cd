//! Synthetic Gantt timelines for testing schedule renderers.
//!
//! Generates a fixed number of parallel tracks, fills each with a random
//! non-overlapping interval sequence, then injects a few bounded overlaps
//! between tracks. The result looks like a small job-shop schedule but
//! carries no job or machine semantics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Interval`, `Slice`, `ScheduleInstance`,
//!   `Operation`
//! - **`generator`**: The pipeline: partition, build, induce, emit
//! - **`config`**: `GeneratorConfig`, every tunable in one place
//! - **`validation`**: Configuration checks run before generation
//! - **`error`**: `GanttError` and the crate `Result`
//!
//! # Example
//!
//! ```
//! use u_gantt::{GeneratorConfig, ScheduleGenerator};
//!
//! let config = GeneratorConfig::default().with_tracks(3).with_seed(11);
//! let schedule = ScheduleGenerator::new(config).unwrap().generate().unwrap();
//!
//! for op in &schedule.operations {
//!     assert!(op.track < 3);
//!     assert!(op.duration > 0);
//! }
//! ```
//!
//! # Logging
//!
//! Events go through `tracing`; install any subscriber to see them.
//! Pipeline phases log at `info`, merges at `debug`, rejected trials at
//! `trace`.
//!
//! # References
//!
//! - Feller (1968), "An Introduction to Probability Theory and Its
//!   Applications", Vol. 1 (stars and bars)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems" (Gantt
//!   charts for machine schedules)

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::{GanttError, Result};
pub use generator::{GeneratedSchedule, ScheduleGenerator};
