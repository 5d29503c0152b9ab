//! The attribute-provider contract

use crate::error::AttrError;
use attr_types::{AttrTag, AttrValue, GroupPrincipal, PermissionSet, UserPrincipal};
use node_store::MetadataNode;
use serde::{Deserialize, Serialize};

/// File-system-wide defaults applied when a node is created
///
/// Providers read this when supplying creation-time values; no provider
/// consults a clock or ambient configuration of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreationContext {
    /// Creation timestamp, nanoseconds since the epoch
    pub now_nanos: u64,
    /// Default owner for new nodes
    pub owner: UserPrincipal,
    /// Default group for new nodes
    pub group: GroupPrincipal,
    /// Default permission bits for new nodes
    pub permissions: PermissionSet,
}

impl CreationContext {
    /// Creates a context with the conventional defaults: owner `"user"`,
    /// group `"group"`, permissions `rw-r--r--`
    pub fn new(now_nanos: u64) -> Self {
        Self {
            now_nanos,
            owner: UserPrincipal::new("user"),
            group: GroupPrincipal::new("group"),
            permissions: PermissionSet::from_mode(0o644),
        }
    }

    /// Sets the default owner (builder pattern)
    pub fn with_owner(mut self, owner: UserPrincipal) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the default group (builder pattern)
    pub fn with_group(mut self, group: GroupPrincipal) -> Self {
        self.group = group;
        self
    }

    /// Sets the default permissions (builder pattern)
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }
}

impl Default for CreationContext {
    fn default() -> Self {
        Self::new(0)
    }
}

/// The capability contract every attribute view implements
///
/// Providers are policy tables: they know which attributes a view answers
/// for, which other views it inherits, how values are typed, and what a
/// new node starts with. All node state lives in the node's own record.
pub trait AttributeProvider: Send + Sync {
    /// The provider's identifying view name; never empty, constant for the
    /// provider's lifetime
    fn view_name(&self) -> &'static str;

    /// The attribute names this provider answers for directly, excluding
    /// inherited ones
    fn supported(&self) -> &'static [&'static str];

    /// Whether this provider answers for the given attribute name
    ///
    /// Defaults to membership in [`supported`](Self::supported); the user
    /// view overrides this because its attribute namespace is open-ended.
    fn supports(&self, name: &str) -> bool {
        self.supported().contains(&name)
    }

    /// Views whose attributes are part of this view when requested by this
    /// view's name, in declaration order; empty for leaf views
    fn inherits(&self) -> &'static [&'static str] {
        &[]
    }

    /// Reads an attribute, computing derived values on demand
    fn get(&self, node: &dyn MetadataNode, name: &str) -> Result<AttrValue, AttrError>;

    /// Writes an attribute after type validation
    fn set(&self, node: &mut dyn MetadataNode, name: &str, value: AttrValue)
        -> Result<(), AttrError>;

    /// Values populated into a newly created node's record
    fn defaults(&self, ctx: &CreationContext) -> Vec<(&'static str, AttrValue)>;
}

/// Builds the canonical record key for a view's own attribute
pub(crate) fn composite_key(view: &str, name: &str) -> String {
    format!("{}:{}", view, name)
}

/// Reads a stored slot, reporting an uninitialized record explicitly
pub(crate) fn read_stored(
    node: &dyn MetadataNode,
    view: &str,
    name: &str,
) -> Result<AttrValue, AttrError> {
    let key = composite_key(view, name);
    node.read_raw(&key)
        .ok_or(AttrError::MissingValue { key })
}

/// Checks a write's value tag against the attribute's declared type
pub(crate) fn expect_tag(
    view: &str,
    name: &str,
    expected: AttrTag,
    value: &AttrValue,
) -> Result<(), AttrError> {
    if value.tag() == expected {
        Ok(())
    } else {
        Err(AttrError::TypeMismatch {
            view: view.to_string(),
            name: name.to_string(),
            expected,
            actual: value.tag(),
        })
    }
}

/// Shorthand for the unsupported-attribute error
pub(crate) fn unsupported(view: &str, name: &str) -> AttrError {
    AttrError::Unsupported {
        view: view.to_string(),
        name: name.to_string(),
    }
}

/// Shorthand for the read-only-attribute error
pub(crate) fn read_only(view: &str, name: &str) -> AttrError {
    AttrError::ReadOnly {
        view: view.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_context_defaults() {
        let ctx = CreationContext::new(1000);
        assert_eq!(ctx.now_nanos, 1000);
        assert_eq!(ctx.owner.name(), "user");
        assert_eq!(ctx.group.name(), "group");
        assert_eq!(ctx.permissions.mode(), 0o644);
    }

    #[test]
    fn test_creation_context_builder() {
        let ctx = CreationContext::new(0)
            .with_owner(UserPrincipal::new("alice"))
            .with_group(GroupPrincipal::new("staff"))
            .with_permissions(PermissionSet::from_mode(0o600));

        assert_eq!(ctx.owner.name(), "alice");
        assert_eq!(ctx.group.name(), "staff");
        assert_eq!(ctx.permissions.mode(), 0o600);
    }

    #[test]
    fn test_expect_tag_mismatch() {
        let err = expect_tag("owner", "owner", AttrTag::User, &AttrValue::Int(1)).unwrap_err();
        assert!(matches!(err, AttrError::TypeMismatch { .. }));
    }
}
