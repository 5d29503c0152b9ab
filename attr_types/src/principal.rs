//! User and group principals
//!
//! Principals are names, not authority. Owning a file says who is
//! accountable for it; enforcement lives elsewhere.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A named user identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserPrincipal(String);

impl UserPrincipal {
    /// Creates a user principal with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the principal's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

impl From<&str> for UserPrincipal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A named group identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupPrincipal(String);

impl GroupPrincipal {
    /// Creates a group principal with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the group's name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group:{}", self.0)
    }
}

impl From<&str> for GroupPrincipal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_principal_name() {
        let user = UserPrincipal::new("alice");
        assert_eq!(user.name(), "alice");
        assert_eq!(format!("{}", user), "user:alice");
    }

    #[test]
    fn test_group_principal_name() {
        let group = GroupPrincipal::new("staff");
        assert_eq!(group.name(), "staff");
        assert_eq!(format!("{}", group), "group:staff");
    }

    #[test]
    fn test_principal_equality_is_by_name() {
        assert_eq!(UserPrincipal::new("alice"), UserPrincipal::from("alice"));
        assert_ne!(UserPrincipal::new("alice"), UserPrincipal::new("bob"));
    }
}
