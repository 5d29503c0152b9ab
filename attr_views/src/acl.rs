//! The `acl` attribute view
//!
//! A single list-valued attribute on top of the inherited `owner` and
//! `basic` attributes. Entries are carried whole; nothing here evaluates
//! them.

use crate::error::AttrError;
use crate::provider::{
    composite_key, expect_tag, read_stored, unsupported, AttributeProvider, CreationContext,
};
use attr_types::{AttrTag, AttrValue};
use node_store::MetadataNode;

const VIEW: &str = "acl";

const SUPPORTED: &[&str] = &["acl"];

const INHERITS: &[&str] = &["owner", "basic"];

/// Provider for the `acl` view
#[derive(Debug, Default)]
pub struct AclAttributeProvider;

impl AttributeProvider for AclAttributeProvider {
    fn view_name(&self) -> &'static str {
        VIEW
    }

    fn supported(&self) -> &'static [&'static str] {
        SUPPORTED
    }

    fn inherits(&self) -> &'static [&'static str] {
        INHERITS
    }

    fn get(&self, node: &dyn MetadataNode, name: &str) -> Result<AttrValue, AttrError> {
        match name {
            "acl" => read_stored(node, VIEW, name),
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn set(
        &self,
        node: &mut dyn MetadataNode,
        name: &str,
        value: AttrValue,
    ) -> Result<(), AttrError> {
        match name {
            "acl" => {
                expect_tag(VIEW, name, AttrTag::Acl, &value)?;
                node.write_raw(&composite_key(VIEW, name), value);
                Ok(())
            }
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn defaults(&self, _ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        vec![("acl", AttrValue::Acl(Vec::new()))]
    }
}
