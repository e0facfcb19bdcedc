//! Disk model.
//!
//! Describes the addressable track range `[0, size-1]` and where the head
//! starts. A `Disk` is validated once at construction and never changes.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::validation::validate_disk;

/// Default number of tracks.
pub const DEFAULT_DISK_SIZE: i64 = 200;

/// Default starting head position.
pub const DEFAULT_HEAD: i64 = 50;

/// Assumed initial sweep direction.
///
/// Recorded for callers that want it; SCAN and C-SCAN currently always
/// sweep toward higher tracks first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward increasing track numbers.
    #[default]
    Up,
    /// Toward decreasing track numbers.
    Down,
}

impl Direction {
    /// Signed unit value: `+1` for `Up`, `-1` for `Down`.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// Maps a signed value back to a direction (negative → `Down`).
    pub fn from_sign(sign: i64) -> Self {
        if sign < 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// An immutable disk description.
///
/// # Example
/// ```
/// use u_disksched::models::{Direction, Disk};
///
/// let disk = Disk::new(200, 50).unwrap().with_direction(Direction::Down);
/// assert_eq!(disk.max_track(), 199);
/// assert_eq!(disk.direction().sign(), -1);
/// assert!(Disk::new(200, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Disk {
    size: i64,
    head: i64,
    direction: Direction,
}

impl Disk {
    /// Creates a disk with `size` tracks and the head at `head`.
    ///
    /// Fails with `OutOfRange` if `size` is not positive or `head` is
    /// outside `[0, size-1]`.
    pub fn new(size: i64, head: i64) -> SimResult<Self> {
        validate_disk(size, head)?;
        Ok(Self {
            size,
            head,
            direction: Direction::Up,
        })
    }

    /// Sets the assumed initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Number of tracks.
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Starting head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Assumed initial sweep direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Highest valid track (`size - 1`).
    pub fn max_track(&self) -> i64 {
        self.size - 1
    }

    /// Whether `track` lies on this disk.
    pub fn contains(&self, track: i64) -> bool {
        (0..self.size).contains(&track)
    }
}

impl Default for Disk {
    fn default() -> Self {
        Self {
            size: DEFAULT_DISK_SIZE,
            head: DEFAULT_HEAD,
            direction: Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_disk_new() {
        let d = Disk::new(200, 50).unwrap();
        assert_eq!(d.size(), 200);
        assert_eq!(d.head(), 50);
        assert_eq!(d.direction(), Direction::Up);
        assert_eq!(d.max_track(), 199);
    }

    #[test]
    fn test_disk_boundary_heads() {
        assert!(Disk::new(200, 0).is_ok());
        assert!(Disk::new(200, 199).is_ok());
        assert!(Disk::new(1, 0).is_ok());
    }

    #[test]
    fn test_disk_head_out_of_range() {
        let err = Disk::new(200, -1).unwrap_err();
        assert!(matches!(err, SimError::OutOfRange { value: -1, .. }));
        assert!(matches!(
            Disk::new(200, 200),
            Err(SimError::OutOfRange { what: "head", .. })
        ));
    }

    #[test]
    fn test_disk_invalid_size() {
        assert!(matches!(
            Disk::new(0, 0),
            Err(SimError::OutOfRange {
                what: "disk size",
                ..
            })
        ));
        assert!(Disk::new(-5, 0).is_err());
    }

    #[test]
    fn test_disk_contains() {
        let d = Disk::new(10, 3).unwrap();
        assert!(d.contains(0));
        assert!(d.contains(9));
        assert!(!d.contains(10));
        assert!(!d.contains(-1));
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Up.sign(), 1);
        assert_eq!(Direction::Down.sign(), -1);
        assert_eq!(Direction::from_sign(-1), Direction::Down);
        assert_eq!(Direction::from_sign(1), Direction::Up);
        assert_eq!(Direction::from_sign(0), Direction::Up);
    }

    #[test]
    fn test_default_disk() {
        let d = Disk::default();
        assert_eq!(d.size(), DEFAULT_DISK_SIZE);
        assert_eq!(d.head(), DEFAULT_HEAD);
    }
}
