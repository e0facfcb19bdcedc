//! Disk-head scheduling simulation.
//!
//! Given a disk, a starting head position and a list of pending track
//! requests, computes the order in which a policy services them and the
//! resulting seek cost.
//!
//! # Modules
//!
//! - **`models`**: `Disk`, `Direction`, `SimulationResult`, `SeekStep`
//! - **`policy`**: `Policy` (FCFS, SSTF, SCAN, C-SCAN), `simulate`, `compare`
//! - **`metrics`**: `SeekMetrics`, the shared seek-cost derivation
//! - **`validation`**: `OutOfRange` checks for heads and requests
//! - **`workload`**: request-list parsing and random workloads
//! - **`config`**: `SimulationConfig`, a serde-loadable run description
//!
//! # Example
//!
//! ```
//! use u_disksched::models::Disk;
//! use u_disksched::policy::{simulate, Policy};
//!
//! let disk = Disk::new(200, 50).unwrap();
//! let result = simulate(Policy::Scan, &[82, 170, 43], &disk).unwrap();
//! assert_eq!(result.positions(), &[50, 82, 170, 43]);
//! assert_eq!(result.total_seek(), 32 + 88 + 127);
//! ```
//!
//! All computation is synchronous and side-effect free; results can be
//! produced concurrently from any number of threads.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 11
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;
pub mod workload;

pub use error::{SimError, SimResult};
