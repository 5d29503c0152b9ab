//! # Node Store
//!
//! This crate defines the node side of the attribute layer: the in-memory
//! object representing one file or directory, and the raw attribute record
//! it owns.
//!
//! ## Design
//!
//! - A node owns exactly one [`AttributeRecord`], a map from composite
//!   `"view:attribute"` keys to typed values.
//! - Attribute providers reach nodes only through the [`MetadataNode`]
//!   trait: raw record access plus the node-kind and content-size queries.
//! - Raw access performs no validation; type checking and read-only
//!   enforcement live in the provider layer.
//! - Callers serialize concurrent get/set on the same node; the store adds
//!   no locking of its own.

pub mod node;
pub mod record;
pub mod store;

pub use node::{Node, NodeId, NodeKind};
pub use record::AttributeRecord;
pub use store::MetadataNode;
