//! Timeline domain models.
//!
//! Provides the data types shared by every generation phase.
//!
//! # Domain Mappings
//!
//! | u-gantt | Job shop | Gantt chart |
//! |---------|----------|-------------|
//! | Slice | Machine sequence | Row |
//! | Interval | Processing window | Bar extent |
//! | Operation | Scheduled operation | Bar |
//! | ScheduleInstance | Machine plan | Whole chart |

mod instance;
mod interval;
mod operation;
mod slice;

pub use instance::ScheduleInstance;
pub use interval::{Boundary, BoundaryKind, Interval};
pub use operation::Operation;
pub use slice::Slice;
