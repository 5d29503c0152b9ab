//! The `dos` attribute view
//!
//! Four boolean flags on top of the inherited `basic` attributes.

use crate::error::AttrError;
use crate::provider::{
    composite_key, expect_tag, unsupported, read_stored, AttributeProvider, CreationContext,
};
use attr_types::{AttrTag, AttrValue};
use node_store::MetadataNode;

const VIEW: &str = "dos";

const SUPPORTED: &[&str] = &["readonly", "hidden", "archive", "system"];

const INHERITS: &[&str] = &["basic"];

/// Provider for the `dos` view
#[derive(Debug, Default)]
pub struct DosAttributeProvider;

impl AttributeProvider for DosAttributeProvider {
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
        if !SUPPORTED.contains(&name) {
            return Err(unsupported(VIEW, name));
        }
        read_stored(node, VIEW, name)
    }

    fn set(
        &self,
        node: &mut dyn MetadataNode,
        name: &str,
        value: AttrValue,
    ) -> Result<(), AttrError> {
        if !SUPPORTED.contains(&name) {
            return Err(unsupported(VIEW, name));
        }
        expect_tag(VIEW, name, AttrTag::Bool, &value)?;
        node.write_raw(&composite_key(VIEW, name), value);
        Ok(())
    }

    fn defaults(&self, _ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        vec![
            ("readonly", AttrValue::Bool(false)),
            ("hidden", AttrValue::Bool(false)),
            ("archive", AttrValue::Bool(false)),
            ("system", AttrValue::Bool(false)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use node_store::{Node, NodeKind};

    fn test_node() -> Node {
        let mut node = Node::new(NodeKind::Regular);
        let provider = DosAttributeProvider;
        for (name, value) in provider.defaults(&CreationContext::new(0)) {
            node.write_raw(&composite_key(VIEW, name), value);
        }
        node
    }

    #[test]
    fn test_all_flags_default_false() {
        let node = test_node();
        let provider = DosAttributeProvider;

        for name in SUPPORTED {
            assert_eq!(
                provider.get(&node, name).unwrap(),
                AttrValue::Bool(false),
                "flag {} should default to false",
                name
            );
        }
    }

    #[test]
    fn test_set_flag_round_trip() {
        let mut node = test_node();
        let provider = DosAttributeProvider;

        provider
            .set(&mut node, "hidden", AttrValue::Bool(true))
            .unwrap();
        assert_eq!(provider.get(&node, "hidden").unwrap(), AttrValue::Bool(true));
        // the other flags are untouched
        assert_eq!(
            provider.get(&node, "readonly").unwrap(),
            AttrValue::Bool(false)
        );
    }

    #[test]
    fn test_flag_write_is_type_checked() {
        let mut node = test_node();
        let provider = DosAttributeProvider;

        let err = provider
            .set(&mut node, "readonly", AttrValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, AttrError::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_name() {
        let provider = DosAttributeProvider;
        let err = provider.get(&test_node(), "sparse").unwrap_err();
        assert!(matches!(err, AttrError::Unsupported { .. }));
    }
}
