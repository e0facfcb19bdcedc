//! Simulation run configuration.
//!
//! A serde-loadable description of one run: disk geometry, policy and
//! request list. Missing fields fall back to a 200-track disk with the
//! head at 50, FCFS, and no requests.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::models::{Direction, Disk, SimulationResult, DEFAULT_DISK_SIZE, DEFAULT_HEAD};
use crate::policy::{simulate, Policy};

/// Input container for one simulation run.
///
/// # Example
/// ```
/// use u_disksched::config::SimulationConfig;
/// use u_disksched::policy::Policy;
///
/// let result = SimulationConfig::new()
///     .with_policy(Policy::Scan)
///     .with_requests(vec![82, 170, 43])
///     .run()
///     .unwrap();
/// assert_eq!(result.positions(), &[50, 82, 170, 43]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of tracks.
    pub disk_size: i64,
    /// Starting head position.
    pub head: i64,
    /// Assumed initial sweep direction.
    pub direction: Direction,
    /// Policy to run.
    pub policy: Policy,
    /// Track requests, in arrival order.
    pub requests: Vec<i64>,
}

impl SimulationConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the disk size.
    pub fn with_disk_size(mut self, disk_size: i64) -> Self {
        self.disk_size = disk_size;
        self
    }

    /// Sets the starting head position.
    pub fn with_head(mut self, head: i64) -> Self {
        self.head = head;
        self
    }

    /// Sets the assumed sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the request list.
    pub fn with_requests(mut self, requests: Vec<i64>) -> Self {
        self.requests = requests;
        self
    }

    /// Builds the validated disk.
    pub fn build_disk(&self) -> SimResult<Disk> {
        Ok(Disk::new(self.disk_size, self.head)?.with_direction(self.direction))
    }

    /// Validates everything and runs the configured policy.
    pub fn run(&self) -> SimResult<SimulationResult> {
        let disk = self.build_disk()?;
        simulate(self.policy, &self.requests, &disk)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            disk_size: DEFAULT_DISK_SIZE,
            head: DEFAULT_HEAD,
            direction: Direction::Up,
            policy: Policy::Fcfs,
            requests: Vec::new(),
        }
    }
}
