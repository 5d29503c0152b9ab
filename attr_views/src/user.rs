//! The `user` attribute view
//!
//! Arbitrary caller-defined attributes stored as opaque byte payloads. The
//! view's attribute namespace is open-ended: any well-formed name can be
//! written, and a name is "supported" exactly while a value is stored
//! under it.

use crate::error::AttrError;
use crate::key::KeyParser;
use crate::provider::{
    composite_key, expect_tag, unsupported, AttributeProvider, CreationContext,
};
use attr_types::{AttrTag, AttrValue};
use node_store::MetadataNode;

const VIEW: &str = "user";

/// Provider for the `user` view; leaf of the inheritance graph
#[derive(Debug, Default)]
pub struct UserDefinedAttributeProvider;

impl AttributeProvider for UserDefinedAttributeProvider {
    fn view_name(&self) -> &'static str {
        VIEW
    }

    /// Empty by declaration: the set of user-defined names is per-node
    /// state, not provider policy
    fn supported(&self) -> &'static [&'static str] {
        &[]
    }

    fn supports(&self, name: &str) -> bool {
        KeyParser::is_valid_segment(name)
    }

    fn get(&self, node: &dyn MetadataNode, name: &str) -> Result<AttrValue, AttrError> {
        if !KeyParser::is_valid_segment(name) {
            return Err(AttrError::MalformedName(name.to_string()));
        }
        node.read_raw(&composite_key(VIEW, name))
            .ok_or_else(|| unsupported(VIEW, name))
    }

    fn set(
        &self,
        node: &mut dyn MetadataNode,
        name: &str,
        value: AttrValue,
    ) -> Result<(), AttrError> {
        if !KeyParser::is_valid_segment(name) {
            return Err(AttrError::MalformedName(name.to_string()));
        }
        expect_tag(VIEW, name, AttrTag::Bytes, &value)?;
        node.write_raw(&composite_key(VIEW, name), value);
        Ok(())
    }

    fn defaults(&self, _ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        Vec::new()
    }
}
