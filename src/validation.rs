//! Input validation for disk simulations.
//!
//! Checks that a disk is well-formed and that every request track lies
//! in `[0, size-1]` before any policy runs. Values are never clamped:
//! the first offending value is reported and the simulation is aborted.

use crate::error::{SimError, SimResult};
use crate::models::Disk;

/// Validates a disk size and starting head position.
///
/// # Errors
/// `OutOfRange` if `size <= 0` or `head` is outside `[0, size-1]`.
pub fn validate_disk(size: i64, head: i64) -> SimResult<()> {
    if size <= 0 {
        return Err(SimError::OutOfRange {
            what: "disk size",
            value: size,
            size,
        });
    }
    check_track("head", head, size)
}

/// Validates every request track against the disk's range.
///
/// # Errors
/// `OutOfRange` naming the first request outside `[0, size-1]`.
pub fn validate_requests(requests: &[i64], disk: &Disk) -> SimResult<()> {
    requests
        .iter()
        .try_for_each(|&track| check_track("request", track, disk.size()))
}

fn check_track(what: &'static str, track: i64, size: i64) -> SimResult<()> {
    if (0..size).contains(&track) {
        Ok(())
    } else {
        Err(SimError::OutOfRange {
            what,
            value: track,
            size,
        })
    }
}
