//! Attribute operations
//!
//! This module defines the operations the metadata service offers to the
//! file-system-operations layer.

use attr_types::AttrValue;
use attr_views::AttrError;
use node_store::MetadataNode;
use std::collections::{BTreeMap, BTreeSet};

/// Attribute operations trait
///
/// Everything a higher layer needs to read and write node metadata by
/// composite `"view:attribute"` key or by whole view.
pub trait NodeAttributeOperations {
    /// Reads one attribute by composite key
    fn get_attribute(&self, node: &dyn MetadataNode, key: &str) -> Result<AttrValue, AttrError>;

    /// Writes one attribute by composite key
    fn set_attribute(
        &self,
        node: &mut dyn MetadataNode,
        key: &str,
        value: AttrValue,
    ) -> Result<(), AttrError>;

    /// Lists every attribute name visible through a view, inherited ones
    /// included
    fn list_attributes(&self, view: &str) -> Result<BTreeSet<String>, AttrError>;

    /// Reads every attribute visible through a view in one call
    fn read_view(
        &self,
        node: &dyn MetadataNode,
        view: &str,
    ) -> Result<BTreeMap<String, AttrValue>, AttrError>;

    /// Whether the file system serves the named view
    fn supports_view(&self, view: &str) -> bool;
}
