//! The `basic` attribute view
//!
//! Timestamps, size, kind flags, and the opaque file key. Size and the
//! kind flags are computed live from the node rather than stored; only the
//! three timestamps are settable.

use crate::error::AttrError;
use crate::provider::{
    composite_key, expect_tag, read_only, read_stored, unsupported, AttributeProvider,
    CreationContext,
};
use attr_types::{AttrTag, AttrValue, FileTime};
use node_store::{MetadataNode, NodeKind};

const VIEW: &str = "basic";

const SUPPORTED: &[&str] = &[
    "lastModifiedTime",
    "lastAccessTime",
    "creationTime",
    "size",
    "isRegularFile",
    "isDirectory",
    "isSymbolicLink",
    "isOther",
    "fileKey",
];

/// Provider for the `basic` view; leaf of the inheritance graph
#[derive(Debug, Default)]
pub struct BasicAttributeProvider;

impl AttributeProvider for BasicAttributeProvider {
    fn view_name(&self) -> &'static str {
        VIEW
    }

    fn supported(&self) -> &'static [&'static str] {
        SUPPORTED
    }

    fn get(&self, node: &dyn MetadataNode, name: &str) -> Result<AttrValue, AttrError> {
        match name {
            "lastModifiedTime" | "lastAccessTime" | "creationTime" => {
                read_stored(node, VIEW, name)
            }
            "size" => Ok(AttrValue::Int(node.content_size())),
            "isRegularFile" => Ok(AttrValue::Bool(node.kind() == NodeKind::Regular)),
            "isDirectory" => Ok(AttrValue::Bool(node.kind() == NodeKind::Directory)),
            "isSymbolicLink" => Ok(AttrValue::Bool(node.kind() == NodeKind::Symlink)),
            // every node is one of the three kinds above
            "isOther" => Ok(AttrValue::Bool(false)),
            "fileKey" => Ok(AttrValue::Id(node.id().as_uuid())),
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
            "lastModifiedTime" | "lastAccessTime" | "creationTime" => {
                expect_tag(VIEW, name, AttrTag::Time, &value)?;
                node.write_raw(&composite_key(VIEW, name), value);
                Ok(())
            }
            "size" | "isRegularFile" | "isDirectory" | "isSymbolicLink" | "isOther"
            | "fileKey" => Err(read_only(VIEW, name)),
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn defaults(&self, ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        let now = AttrValue::Time(FileTime::from_nanos(ctx.now_nanos));
        vec![
            ("creationTime", now.clone()),
            ("lastModifiedTime", now.clone()),
            ("lastAccessTime", now),
        ]
    }
}
