//! Simulation result model.
//!
//! Holds the visited-position trace produced by a policy together with the
//! seek metrics derived from it. Reporters read it; nothing mutates it.

use serde::Serialize;

use crate::metrics::SeekMetrics;

/// Outcome of running one policy over one request list.
///
/// `positions[0]` is the starting head; each later entry is one serviced
/// request, so `positions.len() == requests.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    algorithm_name: String,
    positions: Vec<i64>,
    requests: Vec<i64>,
    #[serde(flatten)]
    metrics: SeekMetrics,
}

/// One row of the step table: a single head movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeekStep {
    /// 1-based step number.
    pub step: usize,
    /// Track the head moved from.
    pub from: i64,
    /// Track the head moved to.
    pub to: i64,
    /// Distance travelled.
    pub seek: u64,
}

impl SimulationResult {
    /// Builds a result and derives its seek metrics.
    pub fn new(algorithm_name: impl Into<String>, positions: Vec<i64>, requests: Vec<i64>) -> Self {
        let metrics = SeekMetrics::calculate(&positions, requests.len());
        Self {
            algorithm_name: algorithm_name.into(),
            positions,
            requests,
            metrics,
        }
    }

    /// Label of the policy that produced this result.
    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    /// Visited tracks, starting with the initial head position.
    pub fn positions(&self) -> &[i64] {
        &self.positions
    }

    /// The request list as given.
    pub fn requests(&self) -> &[i64] {
        &self.requests
    }

    /// Per-step seek distances.
    pub fn seek_distances(&self) -> &[u64] {
        &self.metrics.seek_distances
    }

    /// Total head movement.
    pub fn total_seek(&self) -> u64 {
        self.metrics.total_seek
    }

    /// Mean movement per request (0 with no requests).
    pub fn average_seek(&self) -> f64 {
        self.metrics.average_seek
    }

    /// Derived seek metrics.
    pub fn metrics(&self) -> &SeekMetrics {
        &self.metrics
    }

    /// Number of head movements.
    pub fn step_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Step table, one row per movement.
    pub fn steps(&self) -> Vec<SeekStep> {
        self.positions
            .windows(2)
            .zip(self.metrics.seek_distances.iter())
            .enumerate()
            .map(|(i, (w, &seek))| SeekStep {
                step: i + 1,
                from: w[0],
                to: w[1],
                seek,
            })
            .collect()
    }
}
