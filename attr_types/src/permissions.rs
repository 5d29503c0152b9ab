//! POSIX permission sets
//!
//! Permissions are modeled as a set of nine distinct bits rather than a raw
//! mode integer, with octal conversion at the edges for callers that speak
//! `0o644`.

use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One of the nine POSIX permission bits
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PosixPermission {
    OwnerRead,
    OwnerWrite,
    OwnerExecute,
    GroupRead,
    GroupWrite,
    GroupExecute,
    OtherRead,
    OtherWrite,
    OtherExecute,
}

impl PosixPermission {
    /// All nine permissions, in `rwxrwxrwx` display order
    pub const ALL: [PosixPermission; 9] = [
        PosixPermission::OwnerRead,
        PosixPermission::OwnerWrite,
        PosixPermission::OwnerExecute,
        PosixPermission::GroupRead,
        PosixPermission::GroupWrite,
        PosixPermission::GroupExecute,
        PosixPermission::OtherRead,
        PosixPermission::OtherWrite,
        PosixPermission::OtherExecute,
    ];

    /// Returns this permission's bit within an octal mode
    pub fn bit(self) -> u32 {
        match self {
            PosixPermission::OwnerRead => 0o400,
            PosixPermission::OwnerWrite => 0o200,
            PosixPermission::OwnerExecute => 0o100,
            PosixPermission::GroupRead => 0o040,
            PosixPermission::GroupWrite => 0o020,
            PosixPermission::GroupExecute => 0o010,
            PosixPermission::OtherRead => 0o004,
            PosixPermission::OtherWrite => 0o002,
            PosixPermission::OtherExecute => 0o001,
        }
    }

    /// Returns the `r`/`w`/`x` symbol for this permission
    pub fn symbol(self) -> char {
        match self {
            PosixPermission::OwnerRead | PosixPermission::GroupRead | PosixPermission::OtherRead => {
                'r'
            }
            PosixPermission::OwnerWrite
            | PosixPermission::GroupWrite
            | PosixPermission::OtherWrite => 'w',
            PosixPermission::OwnerExecute
            | PosixPermission::GroupExecute
            | PosixPermission::OtherExecute => 'x',
        }
    }
}

/// A set of POSIX permissions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionSet(BTreeSet<PosixPermission>);

impl PermissionSet {
    /// Creates an empty permission set
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a set from the low nine bits of an octal mode
    ///
    /// # Examples
    ///
    /// ```
    /// use attr_types::{PermissionSet, PosixPermission};
    ///
    /// let perms = PermissionSet::from_mode(0o644);
    /// assert!(perms.contains(PosixPermission::OwnerWrite));
    /// assert!(!perms.contains(PosixPermission::OtherWrite));
    /// ```
    pub fn from_mode(mode: u32) -> Self {
        let mut set = BTreeSet::new();
        for permission in PosixPermission::ALL {
            if mode & permission.bit() != 0 {
                set.insert(permission);
            }
        }
        Self(set)
    }

    /// Returns the set as an octal mode (low nine bits)
    pub fn mode(&self) -> u32 {
        self.0.iter().map(|p| p.bit()).sum()
    }

    /// Checks whether the set contains a permission
    pub fn contains(&self, permission: PosixPermission) -> bool {
        self.0.contains(&permission)
    }

    /// Adds a permission; returns false if it was already present
    pub fn insert(&mut self, permission: PosixPermission) -> bool {
        self.0.insert(permission)
    }

    /// Removes a permission; returns true if it was present
    pub fn remove(&mut self, permission: PosixPermission) -> bool {
        self.0.remove(&permission)
    }

    /// Number of permissions in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no permissions are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the permissions in display order
    pub fn iter(&self) -> impl Iterator<Item = PosixPermission> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for PermissionSet {
    /// Formats as the familiar nine-character `rwxr-xr--` string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for permission in PosixPermission::ALL {
            if self.contains(permission) {
                write!(f, "{}", permission.symbol())?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<PosixPermission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = PosixPermission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [0o000, 0o644, 0o755, 0o777, 0o400] {
            assert_eq!(PermissionSet::from_mode(mode).mode(), mode);
        }
    }

    #[test]
    fn test_from_mode_ignores_high_bits() {
        assert_eq!(PermissionSet::from_mode(0o40644).mode(), 0o644);
    }

    #[test]
    fn test_display_string() {
        assert_eq!(PermissionSet::from_mode(0o644).to_string(), "rw-r--r--");
        assert_eq!(PermissionSet::from_mode(0o755).to_string(), "rwxr-xr-x");
        assert_eq!(PermissionSet::empty().to_string(), "---------");
    }

    #[test]
    fn test_insert_and_remove() {
        let mut perms = PermissionSet::empty();
        assert!(perms.insert(PosixPermission::OwnerRead));
        assert!(!perms.insert(PosixPermission::OwnerRead));
        assert_eq!(perms.len(), 1);
        assert!(perms.remove(PosixPermission::OwnerRead));
        assert!(perms.is_empty());
    }

    #[test]
    fn test_collect_from_iterator() {
        let perms: PermissionSet = [PosixPermission::OwnerRead, PosixPermission::OwnerWrite]
            .into_iter()
            .collect();
        assert_eq!(perms.mode(), 0o600);
    }
}
