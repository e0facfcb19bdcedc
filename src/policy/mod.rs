//! Disk-head scheduling policies.
//!
//! A closed set of four policies dispatched through [`simulate`]:
//!
//! | Policy | Service order |
//! |--------|---------------|
//! | FCFS | Arrival order |
//! | SSTF | Nearest pending track first (smaller track on ties) |
//! | SCAN | Upward sweep from the head, then downward |
//! | C-SCAN | Upward sweep, wrap to the lowest request, upward again |
//!
//! Every policy is a pure function of the request list and the disk. The
//! disk's `direction` is not consulted: SCAN and C-SCAN always sweep up
//! first.
//!
//! # Usage
//!
//! ```
//! use u_disksched::models::Disk;
//! use u_disksched::policy::{simulate, Policy};
//!
//! let disk = Disk::new(200, 50).unwrap();
//! let result = simulate(Policy::Sstf, &[82, 170, 43, 140, 24, 16, 190], &disk).unwrap();
//! assert_eq!(result.positions(), &[50, 43, 24, 16, 82, 140, 170, 190]);
//! assert_eq!(result.total_seek(), 208);
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 11: Disk Scheduling

mod algorithms;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::models::{Disk, SimulationResult};
use crate::validation::validate_requests;

/// A disk-head scheduling policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come, First-Served.
    #[default]
    #[serde(alias = "FCFS")]
    Fcfs,
    /// Shortest Seek Time First.
    #[serde(alias = "SSTF")]
    Sstf,
    /// Elevator sweep.
    #[serde(alias = "SCAN")]
    Scan,
    /// Circular elevator sweep.
    #[serde(alias = "C-SCAN")]
    CScan,
}

impl Policy {
    /// All policies, in display order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sstf, Policy::Scan, Policy::CScan];

    /// Short lowercase key (`"fcfs"`, `"sstf"`, `"scan"`, `"cscan"`).
    pub fn key(self) -> &'static str {
        match self {
            Policy::Fcfs => "fcfs",
            Policy::Sstf => "sstf",
            Policy::Scan => "scan",
            Policy::CScan => "cscan",
        }
    }

    /// Display label (`"FCFS"`, `"SSTF"`, `"SCAN"`, `"C-SCAN"`).
    pub fn label(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
        }
    }

    /// Policy description.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come, First-Served",
            Policy::Sstf => "Shortest Seek Time First",
            Policy::Scan => "Elevator (sweep up, then down)",
            Policy::CScan => "Circular SCAN (sweep up, wrap, sweep up)",
        }
    }

    /// Visited-position trace for `requests`, head first.
    ///
    /// Assumes every request is on the disk.
    pub(crate) fn order(self, requests: &[i64], disk: &Disk) -> Vec<i64> {
        match self {
            Policy::Fcfs => algorithms::fcfs(requests, disk),
            Policy::Sstf => algorithms::sstf(requests, disk),
            Policy::Scan => algorithms::scan(requests, disk),
            Policy::CScan => algorithms::cscan(requests, disk),
        }
    }

    /// Runs this policy. See [`simulate`].
    pub fn simulate(self, requests: &[i64], disk: &Disk) -> SimResult<SimulationResult> {
        simulate(self, requests, disk)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = SimError;

    /// Accepts keys and labels, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sstf" => Ok(Policy::Sstf),
            "scan" => Ok(Policy::Scan),
            "cscan" | "c-scan" => Ok(Policy::CScan),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Runs `policy` over `requests` on `disk`.
///
/// # Errors
/// `OutOfRange` if any request lies outside `[0, size-1]`; no partial
/// result is produced.
pub fn simulate(policy: Policy, requests: &[i64], disk: &Disk) -> SimResult<SimulationResult> {
    validate_requests(requests, disk)?;
    Ok(run_validated(policy, requests, disk))
}

/// Runs every policy over the same input, in [`Policy::ALL`] order.
///
/// Requests are validated once for all policies.
///
/// # Errors
/// `OutOfRange` if any request lies outside the disk.
pub fn compare(requests: &[i64], disk: &Disk) -> SimResult<Vec<SimulationResult>> {
    validate_requests(requests, disk)?;
    debug!(requests = requests.len(), "comparing all policies");
    Ok(Policy::ALL
        .iter()
        .map(|&policy| run_validated(policy, requests, disk))
        .collect())
}

fn run_validated(policy: Policy, requests: &[i64], disk: &Disk) -> SimulationResult {
    debug!(
        policy = policy.key(),
        head = disk.head(),
        size = disk.size(),
        requests = requests.len(),
        "simulating disk schedule"
    );

    let positions = policy.order(requests, disk);
    let result = SimulationResult::new(policy.label(), positions, requests.to_vec());
    trace!(
        policy = policy.key(),
        total_seek = result.total_seek(),
        "simulation finished"
    );
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn disk_and_requests() -> impl Strategy<Value = (Disk, Vec<i64>)> {
        (1i64..500).prop_flat_map(|size| {
            (0..size, prop::collection::vec(0..size, 0..60))
                .prop_map(move |(head, requests)| (Disk::new(size, head).unwrap(), requests))
        })
    }

    fn sorted(mut v: Vec<i64>) -> Vec<i64> {
        v.sort_unstable();
        v
    }

    proptest! {
        #[test]
        fn trace_shape_and_metrics((disk, requests) in disk_and_requests()) {
            for policy in Policy::ALL {
                let r = simulate(policy, &requests, &disk).unwrap();
                let p = r.positions();
                prop_assert_eq!(p.len(), requests.len() + 1);
                prop_assert_eq!(p[0], disk.head());
                prop_assert_eq!(r.seek_distances().len(), p.len() - 1);
                for (i, d) in r.seek_distances().iter().enumerate() {
                    prop_assert_eq!(*d, p[i + 1].abs_diff(p[i]));
                }
                prop_assert_eq!(r.total_seek(), r.seek_distances().iter().sum::<u64>());
                let expected_avg = if requests.is_empty() {
                    0.0
                } else {
                    r.total_seek() as f64 / requests.len() as f64
                };
                prop_assert!((r.average_seek() - expected_avg).abs() < 1e-9);
                // Same multiset of tracks served.
                prop_assert_eq!(sorted(p[1..].to_vec()), sorted(requests.clone()));
            }
        }

        #[test]
        fn fcfs_preserves_order((disk, requests) in disk_and_requests()) {
            let r = simulate(Policy::Fcfs, &requests, &disk).unwrap();
            prop_assert_eq!(&r.positions()[1..], requests.as_slice());
        }

        #[test]
        fn sstf_picks_nearest((disk, requests) in disk_and_requests()) {
            let r = simulate(Policy::Sstf, &requests, &disk).unwrap();
            let mut pending = requests.clone();
            let mut current = disk.head();
            for &next in &r.positions()[1..] {
                let best = pending.iter().map(|t| t.abs_diff(current)).min().unwrap();
                prop_assert_eq!(next.abs_diff(current), best);
                // Ties go to the smaller track.
                let smallest_tied = pending
                    .iter()
                    .copied()
                    .filter(|t| t.abs_diff(current) == best)
                    .min()
                    .unwrap();
                prop_assert_eq!(next, smallest_tied);
                let idx = pending.iter().position(|&t| t == next).unwrap();
                pending.remove(idx);
                current = next;
            }
            prop_assert!(pending.is_empty());
        }

        #[test]
        fn sweeps_serve_upper_side_first((disk, requests) in disk_and_requests()) {
            let head = disk.head();
            for policy in [Policy::Scan, Policy::CScan] {
                let r = simulate(policy, &requests, &disk).unwrap();
                let served = &r.positions()[1..];
                let upper = served.iter().take_while(|&&t| t >= head).count();
                prop_assert_eq!(upper, requests.iter().filter(|&&t| t >= head).count());
                let (right, left) = served.split_at(upper);
                prop_assert!(right.windows(2).all(|w| w[0] <= w[1]));
                prop_assert!(left.iter().all(|&t| t < head));
                if policy == Policy::Scan {
                    prop_assert!(left.windows(2).all(|w| w[0] >= w[1]));
                } else {
                    prop_assert!(left.windows(2).all(|w| w[0] <= w[1]));
                }
            }
        }

        #[test]
        fn out_of_range_request_fails((disk, mut requests) in disk_and_requests(), past in 0i64..10) {
            requests.push(disk.size() + past);
            for policy in Policy::ALL {
                let is_out_of_range = matches!(
                    simulate(policy, &requests, &disk),
                    Err(SimError::OutOfRange { .. })
                );
                prop_assert!(is_out_of_range);
            }
        }
    }
}
