//! File timestamps

use core::fmt;
use serde::{Deserialize, Serialize};

/// A point in time, in nanoseconds since the Unix epoch.
///
/// The attribute layer never reads a clock itself; callers supply timestamps
/// explicitly when nodes are created or touched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct FileTime(u64);

impl FileTime {
    /// The Unix epoch
    pub const EPOCH: FileTime = FileTime(0);

    /// Creates a timestamp from nanoseconds since the epoch
    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Returns the timestamp as nanoseconds since the epoch
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp truncated to whole seconds
    pub fn as_secs(&self) -> u64 {
        self.0 / 1_000_000_000
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(FileTime::EPOCH.as_nanos(), 0);
        assert_eq!(FileTime::EPOCH, FileTime::from_nanos(0));
    }

    #[test]
    fn test_seconds_truncation() {
        let t = FileTime::from_nanos(2_500_000_000);
        assert_eq!(t.as_secs(), 2);
        assert_eq!(t.as_nanos(), 2_500_000_000);
    }

    #[test]
    fn test_ordering() {
        assert!(FileTime::from_nanos(1) < FileTime::from_nanos(2));
        assert!(FileTime::EPOCH < FileTime::from_nanos(1));
    }
}
