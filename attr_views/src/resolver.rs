//! The view-composition resolver
//!
//! A `ViewResolver` belongs to one file system. It snapshots its provider
//! set from the registry at construction, which is also the single point
//! where the file system's own `unix` provider instance is obtained and
//! retained. Every call after that is a stateless resolution over the
//! immutable provider graph plus a read or write against the node's
//! attribute record.

use crate::error::AttrError;
use crate::key::KeyParser;
use crate::provider::AttributeProvider;
use crate::registry::ProviderRegistry;
use attr_types::AttrValue;
use node_store::MetadataNode;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

/// Per-file-system attribute resolver
pub struct ViewResolver {
    providers: BTreeMap<&'static str, Arc<dyn AttributeProvider>>,
}

impl std::fmt::Debug for ViewResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewResolver")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ViewResolver {
    /// Creates a resolver supporting all seven built-in views
    pub fn new(registry: &ProviderRegistry) -> Self {
        let mut providers = BTreeMap::new();
        for view in registry.view_names() {
            if let Some(provider) = registry.get(view) {
                providers.insert(provider.view_name(), provider);
            }
        }
        Self { providers }
    }

    /// Creates a resolver supporting a configured subset of views
    ///
    /// `basic` is always included, and enabling a view transitively enables
    /// the views it inherits. Fails with [`AttrError::UnknownView`] if a
    /// requested name is not recognized by the registry.
    pub fn with_views(registry: &ProviderRegistry, views: &[&str]) -> Result<Self, AttrError> {
        let mut providers: BTreeMap<&'static str, Arc<dyn AttributeProvider>> = BTreeMap::new();
        let mut pending: Vec<&str> = vec!["basic"];
        pending.extend(views);

        while let Some(view) = pending.pop() {
            if providers.contains_key(view) {
                continue;
            }
            let provider = registry
                .get(view)
                .ok_or_else(|| AttrError::UnknownView(view.to_string()))?;
            pending.extend(provider.inherits());
            providers.insert(provider.view_name(), provider);
        }

        Ok(Self { providers })
    }

    /// Whether this resolver serves the named view
    pub fn supports_view(&self, view: &str) -> bool {
        self.providers.contains_key(view)
    }

    /// The providers in this resolver's snapshot, in view-name order
    pub fn providers(&self) -> impl Iterator<Item = &Arc<dyn AttributeProvider>> {
        self.providers.values()
    }

    /// Returns every attribute name visible through the named view: its
    /// provider's own set plus, recursively, those of every inherited view
    ///
    /// The traversal never revisits a view, so it terminates even if a
    /// future provider declared an inheritance cycle.
    pub fn list_attributes(&self, view: &str) -> Result<BTreeSet<String>, AttrError> {
        let provider = self
            .providers
            .get(view)
            .ok_or_else(|| AttrError::UnknownView(view.to_string()))?;

        let mut names = BTreeSet::new();
        let mut visited = BTreeSet::new();
        let mut pending = VecDeque::new();
        pending.push_back(provider.view_name());

        while let Some(current) = pending.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(current_provider) = self.providers.get(current) {
                for name in current_provider.supported() {
                    names.insert((*name).to_string());
                }
                for inherited in current_provider.inherits() {
                    pending.push_back(*inherited);
                }
            }
        }

        Ok(names)
    }

    /// Reads the attribute addressed by a composite `"view:attribute"` key
    pub fn get_attribute(
        &self,
        node: &dyn MetadataNode,
        key: &str,
    ) -> Result<AttrValue, AttrError> {
        let (view, name) = KeyParser::split(key)?;
        let provider = self.resolve_owner(view, name)?;
        provider.get(node, name)
    }

    /// Writes the attribute addressed by a composite `"view:attribute"` key
    ///
    /// Resolution is identical to [`get_attribute`](Self::get_attribute);
    /// provider failures (`ReadOnly`, `TypeMismatch`, `NodeKindMismatch`)
    /// propagate unchanged.
    pub fn set_attribute(
        &self,
        node: &mut dyn MetadataNode,
        key: &str,
        value: AttrValue,
    ) -> Result<(), AttrError> {
        let (view, name) = KeyParser::split(key)?;
        let provider = self.resolve_owner(view, name)?;
        provider.set(node, name, value)
    }

    /// Bulk-reads every attribute visible through the named view
    pub fn read_view(
        &self,
        node: &dyn MetadataNode,
        view: &str,
    ) -> Result<BTreeMap<String, AttrValue>, AttrError> {
        let mut values = BTreeMap::new();
        for name in self.list_attributes(view)? {
            let key = format!("{}:{}", view, name);
            let value = self.get_attribute(node, &key)?;
            values.insert(name, value);
        }
        Ok(values)
    }

    /// Finds the provider that answers for `name` under the requested
    /// view: the view's own provider if it supports the name directly,
    /// otherwise the first match in a declaration-order walk of the
    /// inheritance chain
    fn resolve_owner(
        &self,
        view: &str,
        name: &str,
    ) -> Result<&Arc<dyn AttributeProvider>, AttrError> {
        let provider = self
            .providers
            .get(view)
            .ok_or_else(|| AttrError::UnknownView(view.to_string()))?;

        if provider.supports(name) {
            return Ok(provider);
        }

        let mut visited = BTreeSet::new();
        visited.insert(provider.view_name());
        let mut pending: VecDeque<&'static str> = provider.inherits().iter().copied().collect();

        while let Some(current) = pending.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(candidate) = self.providers.get(current) {
                if candidate.supports(name) {
                    return Ok(candidate);
                }
                for inherited in candidate.inherits() {
                    pending.push_back(*inherited);
                }
            }
        }

        Err(AttrError::Unsupported {
            view: view.to_string(),
            name: name.to_string(),
        })
    }
}
