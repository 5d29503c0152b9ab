//! Node types and identifiers

use crate::record::AttributeRecord;
use crate::store::MetadataNode;
use attr_types::AttrValue;
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Creates a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a node ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// The kind of object a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Symbolic link
    Symlink,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Regular => write!(f, "regular file"),
            NodeKind::Directory => write!(f, "directory"),
            NodeKind::Symlink => write!(f, "symbolic link"),
        }
    }
}

/// An in-memory file-system node
///
/// Holds the node's kind, its content size, and the attribute record that
/// providers read and write. Content bytes themselves live elsewhere; this
/// layer only needs their length.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    content_size: u64,
    record: AttributeRecord,
}

impl Node {
    /// Creates a node of the given kind with an empty attribute record
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            content_size: 0,
            record: AttributeRecord::new(),
        }
    }

    /// Updates the content size reported through `basic:size`
    pub fn set_content_size(&mut self, size: u64) {
        self.content_size = size;
    }

    /// Returns the node's attribute record
    pub fn record(&self) -> &AttributeRecord {
        &self.record
    }

    /// Returns the node's attribute record mutably
    pub fn record_mut(&mut self) -> &mut AttributeRecord {
        &mut self.record
    }
}

impl MetadataNode for Node {
    fn id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn content_size(&self) -> u64 {
        self.content_size
    }

    fn read_raw(&self, key: &str) -> Option<AttrValue> {
        self.record.get(key).cloned()
    }

    fn write_raw(&mut self, key: &str, value: AttrValue) {
        self.record.set(key, value);
    }

    fn remove_raw(&mut self, key: &str) -> Option<AttrValue> {
        self.record.remove(key)
    }
}
