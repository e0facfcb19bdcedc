//! Error type shared by the disk model, policies, and workload helpers.

use thiserror::Error;

/// Errors raised while building or running a simulation.
///
/// Only [`SimError::OutOfRange`] can be produced by a policy run; the other
/// variants come from parsing caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A disk size, head position, or request track is outside `[0, size-1]`.
    #[error("{}", describe_out_of_range(.what, .value, .size))]
    OutOfRange {
        /// What was checked ("head", "request", "disk size").
        what: &'static str,
        /// The offending value.
        value: i64,
        /// Disk size the value was checked against.
        size: i64,
    },
    /// Policy name not recognised.
    #[error("unknown scheduling policy '{0}'")]
    UnknownPolicy(String),
    /// A request list item is not an integer.
    #[error("invalid request '{0}': expected an integer track number")]
    InvalidRequest(String),
}

fn describe_out_of_range(what: &str, value: &i64, size: &i64) -> String {
    if *size <= 0 {
        format!("{what} {value} must be positive")
    } else {
        format!("{what} {value} out of disk range 0..{}", size.saturating_sub(1))
    }
}

/// Result alias for this crate.
pub type SimResult<T> = Result<T, SimError>;
