//! Access-control list entries
//!
//! ACL entries are structured records carried whole through the attribute
//! layer; nothing here evaluates them.

use crate::principal::UserPrincipal;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Whether an entry grants or denies its permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AclEntryKind {
    /// Grants the listed permissions
    Allow,
    /// Denies the listed permissions
    Deny,
}

impl fmt::Display for AclEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AclEntryKind::Allow => write!(f, "Allow"),
            AclEntryKind::Deny => write!(f, "Deny"),
        }
    }
}

/// One access-control entry: a principal plus the permissions granted or
/// denied to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    /// Grant or deny
    pub kind: AclEntryKind,
    /// The principal the entry applies to
    pub principal: UserPrincipal,
    /// Named permissions, e.g. `"READ_DATA"`; uninterpreted by this layer
    pub permissions: Vec<String>,
}

impl AclEntry {
    /// Creates an entry with no permissions
    pub fn new(kind: AclEntryKind, principal: UserPrincipal) -> Self {
        Self {
            kind,
            principal,
            permissions: Vec::new(),
        }
    }

    /// Adds a permission name (builder pattern)
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}]",
            self.kind,
            self.principal,
            self.permissions.join(",")
        )
    }
}
