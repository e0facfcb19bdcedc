//! The four head-scheduling algorithms.
//!
//! Each function returns the full visited-position trace: the starting
//! head followed by one entry per request, in service order. Inputs are
//! assumed validated. None of them insert boundary tracks or the C-SCAN
//! return jump; only serviced requests appear after the head.
//!
//! # Complexity
//! FCFS is O(n). SSTF, SCAN and C-SCAN are O(n log n) (one sort).

use crate::models::Disk;

// ======================== Arrival order ========================

/// First-Come, First-Served: requests in input order.
pub(crate) fn fcfs(requests: &[i64], disk: &Disk) -> Vec<i64> {
    let mut positions = Vec::with_capacity(requests.len() + 1);
    positions.push(disk.head());
    positions.extend_from_slice(requests);
    positions
}

// ======================== Nearest first ========================

/// Shortest Seek Time First.
///
/// Repeatedly serves the pending request closest to the current head.
/// On equal distance the smaller track wins.
///
/// Pending requests are kept sorted; the head always sits between the
/// nearest remaining request below it and the nearest at or above it, so
/// each step only compares those two candidates.
pub(crate) fn sstf(requests: &[i64], disk: &Disk) -> Vec<i64> {
    let mut pending = requests.to_vec();
    pending.sort_unstable();

    let mut current = disk.head();
    let mut positions = Vec::with_capacity(requests.len() + 1);
    positions.push(current);

    // pending[..lo] is below the head, pending[hi..] at or above it.
    let split = pending.partition_point(|&t| t < current);
    let (mut lo, mut hi) = (split, split);

    while lo > 0 || hi < pending.len() {
        let below = lo.checked_sub(1).map(|i| pending[i]);
        let above = pending.get(hi).copied();
        let take_below = match (below, above) {
            (Some(b), Some(a)) => current.abs_diff(b) <= a.abs_diff(current),
            (Some(_), None) => true,
            _ => false,
        };

        current = if take_below {
            lo -= 1;
            pending[lo]
        } else {
            hi += 1;
            pending[hi - 1]
        };
        positions.push(current);
    }

    positions
}

// ======================== Sweeps ========================

/// Splits requests into `(below head, at or above head)`, each ascending.
fn partition_sorted(requests: &[i64], head: i64) -> (Vec<i64>, Vec<i64>) {
    let (mut left, mut right): (Vec<i64>, Vec<i64>) =
        requests.iter().partition(|&&t| t < head);
    left.sort_unstable();
    right.sort_unstable();
    (left, right)
}

/// SCAN (elevator): sweep up through `right`, then back down through `left`.
pub(crate) fn scan(requests: &[i64], disk: &Disk) -> Vec<i64> {
    let (left, right) = partition_sorted(requests, disk.head());
    let mut positions = Vec::with_capacity(requests.len() + 1);
    positions.push(disk.head());
    positions.extend(right);
    positions.extend(left.into_iter().rev());
    positions
}

/// Circular SCAN: sweep up through `right`, wrap, then up through `left`.
pub(crate) fn cscan(requests: &[i64], disk: &Disk) -> Vec<i64> {
    let (left, right) = partition_sorted(requests, disk.head());
    let mut positions = Vec::with_capacity(requests.len() + 1);
    positions.push(disk.head());
    positions.extend(right);
    positions.extend(left);
    positions
}
