//! Attribute error taxonomy
//!
//! Every failure is reported synchronously to the caller; nothing here is
//! retried or swallowed. A registry miss for an unrecognized view is an
//! ordinary `None`, not one of these errors, because callers routinely
//! probe for view support.

use attr_types::AttrTag;
use node_store::NodeKind;
use thiserror::Error;

/// Errors raised by attribute providers and the view resolver
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttrError {
    /// The requested view name is not registered
    #[error("unknown attribute view: {0}")]
    UnknownView(String),

    /// The wire key did not parse into `view:attribute`
    #[error("malformed attribute key: {0:?}")]
    MalformedName(String),

    /// No provider in the resolved inheritance chain answers for this name
    #[error("unsupported attribute: {view}:{name}")]
    Unsupported { view: String, name: String },

    /// Write attempted on a computed or fixed attribute
    #[error("attribute is read-only: {view}:{name}")]
    ReadOnly { view: String, name: String },

    /// The value's tag does not match the attribute's declared type
    #[error("type mismatch for {view}:{name}: expected {expected}, got {actual}")]
    TypeMismatch {
        view: String,
        name: String,
        expected: AttrTag,
        actual: AttrTag,
    },

    /// The attribute is not meaningful for this kind of node
    #[error("attribute {view}:{name} is not meaningful for a {kind}")]
    NodeKindMismatch {
        view: String,
        name: String,
        kind: NodeKind,
    },

    /// A supported attribute's record slot was never initialized
    ///
    /// Only reachable when a node bypassed creation-time default
    /// population; kept explicit rather than inventing a value.
    #[error("attribute record has no value for {key}")]
    MissingValue { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = AttrError::Unsupported {
            view: "basic".to_string(),
            name: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported attribute: basic:bogus");

        let err = AttrError::TypeMismatch {
            view: "posix".to_string(),
            name: "permissions".to_string(),
            expected: AttrTag::Permissions,
            actual: AttrTag::Int,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch for posix:permissions: expected permissions, got int"
        );
    }

    #[test]
    fn test_node_kind_mismatch_message() {
        let err = AttrError::NodeKindMismatch {
            view: "posix".to_string(),
            name: "permissions".to_string(),
            kind: NodeKind::Symlink,
        };
        assert_eq!(
            err.to_string(),
            "attribute posix:permissions is not meaningful for a symbolic link"
        );
    }
}
