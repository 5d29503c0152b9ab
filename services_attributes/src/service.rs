//! Metadata service implementation

use crate::operations::NodeAttributeOperations;
use attr_types::AttrValue;
use attr_views::{AttrError, CreationContext, KeyParser, ProviderRegistry, ViewResolver};
use node_store::{MetadataNode, Node, NodeKind};
use std::collections::{BTreeMap, BTreeSet};

/// The per-file-system metadata service
///
/// Owns the file system's view resolver and its creation-default policy.
/// The `now_nanos` field of the stored policy is a placeholder; each
/// creation call supplies the actual timestamp.
pub struct MetadataService {
    resolver: ViewResolver,
    defaults: CreationContext,
}

impl MetadataService {
    /// Creates a service supporting all built-in views
    pub fn new(registry: &ProviderRegistry, defaults: CreationContext) -> Self {
        Self {
            resolver: ViewResolver::new(registry),
            defaults,
        }
    }

    /// Creates a service supporting a configured subset of views
    pub fn with_views(
        registry: &ProviderRegistry,
        views: &[&str],
        defaults: CreationContext,
    ) -> Result<Self, AttrError> {
        Ok(Self {
            resolver: ViewResolver::with_views(registry, views)?,
            defaults,
        })
    }

    /// The underlying resolver
    pub fn resolver(&self) -> &ViewResolver {
        &self.resolver
    }

    /// Creates a node and populates every configured view's defaults
    pub fn create_node(&self, kind: NodeKind, now_nanos: u64) -> Node {
        let mut node = Node::new(kind);
        self.initialize(&mut node, now_nanos);
        node
    }

    /// Populates creation-time defaults into an externally allocated node
    pub fn initialize(&self, node: &mut dyn MetadataNode, now_nanos: u64) {
        let ctx = CreationContext {
            now_nanos,
            ..self.defaults.clone()
        };
        for provider in self.resolver.providers() {
            for (name, value) in provider.defaults(&ctx) {
                let key = format!("{}:{}", provider.view_name(), name);
                node.write_raw(&key, value);
            }
        }
    }

    /// Deletes a user-defined attribute, returning its last value
    ///
    /// Fails with `Unsupported` if no value is stored under the name,
    /// matching the user view's notion of support.
    pub fn remove_user_attribute(
        &self,
        node: &mut dyn MetadataNode,
        name: &str,
    ) -> Result<AttrValue, AttrError> {
        if !KeyParser::is_valid_segment(name) {
            return Err(AttrError::MalformedName(name.to_string()));
        }
        node.remove_raw(&format!("user:{}", name))
            .ok_or_else(|| AttrError::Unsupported {
                view: "user".to_string(),
                name: name.to_string(),
            })
    }
}

impl NodeAttributeOperations for MetadataService {
    fn get_attribute(&self, node: &dyn MetadataNode, key: &str) -> Result<AttrValue, AttrError> {
        self.resolver.get_attribute(node, key)
    }

    fn set_attribute(
        &self,
        node: &mut dyn MetadataNode,
        key: &str,
        value: AttrValue,
    ) -> Result<(), AttrError> {
        self.resolver.set_attribute(node, key, value)
    }

    fn list_attributes(&self, view: &str) -> Result<BTreeSet<String>, AttrError> {
        self.resolver.list_attributes(view)
    }

    fn read_view(
        &self,
        node: &dyn MetadataNode,
        view: &str,
    ) -> Result<BTreeMap<String, AttrValue>, AttrError> {
        self.resolver.read_view(node, view)
    }

    fn supports_view(&self, view: &str) -> bool {
        self.resolver.supports_view(view)
    }
}
