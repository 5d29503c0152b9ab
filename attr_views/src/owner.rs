//! The `owner` attribute view

use crate::error::AttrError;
use crate::provider::{
    composite_key, expect_tag, read_stored, unsupported, AttributeProvider, CreationContext,
};
use attr_types::{AttrTag, AttrValue};
use node_store::MetadataNode;

const VIEW: &str = "owner";

const SUPPORTED: &[&str] = &["owner"];

/// Provider for the `owner` view; leaf of the inheritance graph
#[derive(Debug, Default)]
pub struct OwnerAttributeProvider;

impl AttributeProvider for OwnerAttributeProvider {
    fn view_name(&self) -> &'static str {
        VIEW
    }

    fn supported(&self) -> &'static [&'static str] {
        SUPPORTED
    }

    fn get(&self, node: &dyn MetadataNode, name: &str) -> Result<AttrValue, AttrError> {
        match name {
            "owner" => read_stored(node, VIEW, name),
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
            "owner" => {
                expect_tag(VIEW, name, AttrTag::User, &value)?;
                node.write_raw(&composite_key(VIEW, name), value);
                Ok(())
            }
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn defaults(&self, ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        vec![("owner", AttrValue::User(ctx.owner.clone()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attr_types::UserPrincipal;
    use node_store::{Node, NodeKind};

    fn test_node() -> Node {
        let mut node = Node::new(NodeKind::Regular);
        let provider = OwnerAttributeProvider;
        for (name, value) in provider.defaults(&CreationContext::new(0)) {
            node.write_raw(&composite_key(VIEW, name), value);
        }
        node
    }

    #[test]
    fn test_default_owner() {
        let node = test_node();
        let provider = OwnerAttributeProvider;

        let owner = provider.get(&node, "owner").unwrap();
        assert_eq!(owner.as_user().unwrap().name(), "user");
    }

    #[test]
    fn test_set_owner_round_trip() {
        let mut node = test_node();
        let provider = OwnerAttributeProvider;

        provider
            .set(
                &mut node,
                "owner",
                AttrValue::User(UserPrincipal::new("alice")),
            )
            .unwrap();
        let owner = provider.get(&node, "owner").unwrap();
        assert_eq!(owner.as_user().unwrap().name(), "alice");
    }

    #[test]
    fn test_owner_write_is_type_checked() {
        let mut node = test_node();
        let provider = OwnerAttributeProvider;

        let err = provider
            .set(&mut node, "owner", AttrValue::Text("alice".to_string()))
            .unwrap_err();
        assert!(matches!(err, AttrError::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_name() {
        let provider = OwnerAttributeProvider;
        let err = provider.get(&test_node(), "group").unwrap_err();
        assert!(matches!(err, AttrError::Unsupported { .. }));
    }
}
