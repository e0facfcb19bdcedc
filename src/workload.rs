//! Request workloads: parsing and random generation.

use rand::Rng;

use crate::error::{SimError, SimResult};

/// Number of requests in a generated example workload.
pub const DEFAULT_RANDOM_COUNT: usize = 8;

/// Smallest track range used for generated workloads.
const MIN_RANDOM_RANGE: i64 = 50;

/// Parses a comma-separated request list such as `"82, 170,43"`.
///
/// Whitespace is trimmed and empty items are skipped, so `""` and `"1,,2,"`
/// are accepted. Range checks happen later, against a [`Disk`](crate::models::Disk).
///
/// # Errors
/// `InvalidRequest` for the first item that is not an integer.
pub fn parse_requests(s: &str) -> SimResult<Vec<i64>> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map_err(|_| SimError::InvalidRequest(item.to_string()))
        })
        .collect()
}

/// Generates `count` uniformly random tracks.
///
/// Tracks fall in `[0, max(50, disk_size) - 1]`, so very small disks still
/// get a spread-out example; validate against the disk before simulating.
pub fn random_requests<R: Rng>(rng: &mut R, disk_size: i64, count: usize) -> Vec<i64> {
    let range = disk_size.max(MIN_RANDOM_RANGE);
    (0..count).map(|_| rng.random_range(0..range)).collect()
}
