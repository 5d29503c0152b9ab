//! The node interface consumed by attribute providers

use crate::node::{NodeId, NodeKind};
use attr_types::AttrValue;

/// Raw metadata access to one node
///
/// This is the boundary between the attribute layer and node storage.
/// Providers use it to read and write record slots and to answer
/// node-type-dependent questions; they never hold a node reference across
/// calls.
pub trait MetadataNode {
    /// The node's identity (stable for the node's lifetime)
    fn id(&self) -> NodeId;

    /// What kind of object this node is
    fn kind(&self) -> NodeKind;

    /// Current content length in bytes, computed live
    fn content_size(&self) -> u64;

    /// Reads a raw record slot by composite `"view:attribute"` key
    fn read_raw(&self, key: &str) -> Option<AttrValue>;

    /// Writes a raw record slot, replacing any previous value
    fn write_raw(&mut self, key: &str, value: AttrValue);

    /// Removes a raw record slot, returning the removed value
    fn remove_raw(&mut self, key: &str) -> Option<AttrValue>;
}
