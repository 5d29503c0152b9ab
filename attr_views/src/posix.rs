//! The `posix` attribute view
//!
//! Adds group and permission bits on top of the inherited `owner` and
//! `basic` attributes. Permission bits are not meaningful on symbolic
//! links, so both reads and writes of `permissions` refuse symlink nodes.

use crate::error::AttrError;
use crate::provider::{
    composite_key, expect_tag, read_stored, unsupported, AttributeProvider, CreationContext,
};
use attr_types::{AttrTag, AttrValue};
use node_store::{MetadataNode, NodeKind};

const VIEW: &str = "posix";

const SUPPORTED: &[&str] = &["group", "permissions"];

const INHERITS: &[&str] = &["owner", "basic"];

/// Provider for the `posix` view
#[derive(Debug, Default)]
pub struct PosixAttributeProvider;

fn check_permissions_kind(node: &dyn MetadataNode) -> Result<(), AttrError> {
    if node.kind() == NodeKind::Symlink {
        return Err(AttrError::NodeKindMismatch {
            view: VIEW.to_string(),
            name: "permissions".to_string(),
            kind: node.kind(),
        });
    }
    Ok(())
}

impl AttributeProvider for PosixAttributeProvider {
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
            "group" => read_stored(node, VIEW, name),
            "permissions" => {
                check_permissions_kind(node)?;
                read_stored(node, VIEW, name)
            }
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
            "group" => {
                expect_tag(VIEW, name, AttrTag::Group, &value)?;
                node.write_raw(&composite_key(VIEW, name), value);
                Ok(())
            }
            "permissions" => {
                check_permissions_kind(node)?;
                expect_tag(VIEW, name, AttrTag::Permissions, &value)?;
                node.write_raw(&composite_key(VIEW, name), value);
                Ok(())
            }
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn defaults(&self, ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        vec![
            ("group", AttrValue::Group(ctx.group.clone())),
            (
                "permissions",
                AttrValue::Permissions(ctx.permissions.clone()),
            ),
        ]
    }
}
