//! Disk simulation domain models.
//!
//! - [`Disk`]: track range, starting head, and assumed sweep direction.
//! - [`SimulationResult`]: visited-position trace plus seek metrics.
//! - [`SeekStep`]: one row of the step-by-step movement table.

mod disk;
mod result;

pub use disk::{Direction, Disk, DEFAULT_DISK_SIZE, DEFAULT_HEAD};
pub use result::{SeekStep, SimulationResult};
