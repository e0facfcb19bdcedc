//! Seek-cost metrics.
//!
//! Derives per-step seek distances, total seek and average seek from a
//! visited-position trace. Every policy's result goes through
//! [`SeekMetrics::calculate`]; nothing else computes these numbers.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Seek distance | `|positions[i+1] - positions[i]|` |
//! | Total seek | Sum of seek distances |
//! | Average seek | Total seek / request count (0 with no requests) |

use serde::Serialize;

/// Seek metrics for one visited-position trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekMetrics {
    /// Distance of each head movement, in service order.
    pub seek_distances: Vec<u64>,
    /// Sum of `seek_distances`, saturating at `u64::MAX`.
    pub total_seek: u64,
    /// `total_seek / request_count`, or `0.0` with no requests.
    pub average_seek: f64,
}

impl SeekMetrics {
    /// Computes metrics from a trace and the number of serviced requests.
    ///
    /// `positions` starts with the initial head position; a trace with
    /// fewer than two entries has no movements.
    pub fn calculate(positions: &[i64], request_count: usize) -> Self {
        let seek_distances: Vec<u64> = positions
            .windows(2)
            .map(|w| w[1].abs_diff(w[0]))
            .collect();
        let total_seek = seek_distances
            .iter()
            .fold(0u64, |acc, &d| acc.saturating_add(d));
        let average_seek = if request_count == 0 {
            0.0
        } else {
            total_seek as f64 / request_count as f64
        };

        Self {
            seek_distances,
            total_seek,
            average_seek,
        }
    }
}
