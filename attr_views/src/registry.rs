//! The provider registry
//!
//! Resolves a view name to a provider instance. Six of the seven built-in
//! views are stateless and shared as singletons owned by the registry; the
//! `unix` view is constructed fresh on every lookup because its id cache
//! must stay scoped to a single file system.

use crate::acl::AclAttributeProvider;
use crate::basic::BasicAttributeProvider;
use crate::dos::DosAttributeProvider;
use crate::owner::OwnerAttributeProvider;
use crate::posix::PosixAttributeProvider;
use crate::provider::AttributeProvider;
use crate::unix::UnixAttributeProvider;
use crate::user::UserDefinedAttributeProvider;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The seven built-in view names
pub const VIEW_NAMES: &[&str] = &["basic", "owner", "posix", "unix", "dos", "acl", "user"];

/// Registry of attribute providers for the built-in view set
///
/// The singleton table is built once in [`new`](Self::new) and never
/// mutated, so lookups from many threads need no synchronization.
pub struct ProviderRegistry {
    singletons: BTreeMap<&'static str, Arc<dyn AttributeProvider>>,
}

impl ProviderRegistry {
    /// Builds the registry, constructing the six singleton providers
    ///
    /// Construction order among them is irrelevant: inheritance is resolved
    /// dynamically by name, never by holding provider references.
    pub fn new() -> Self {
        let mut singletons: BTreeMap<&'static str, Arc<dyn AttributeProvider>> = BTreeMap::new();
        singletons.insert("basic", Arc::new(BasicAttributeProvider));
        singletons.insert("owner", Arc::new(OwnerAttributeProvider));
        singletons.insert("posix", Arc::new(PosixAttributeProvider));
        singletons.insert("dos", Arc::new(DosAttributeProvider));
        singletons.insert("acl", Arc::new(AclAttributeProvider));
        singletons.insert("user", Arc::new(UserDefinedAttributeProvider));
        Self { singletons }
    }

    /// Returns the provider for a view name, or `None` for unrecognized
    /// names
    ///
    /// For the six stateless views this is a handle to the shared
    /// singleton. For `"unix"` it is a newly constructed instance on every
    /// call: whoever builds a file system must call this once for it and
    /// retain the instance for that file system's lifetime, dropping it at
    /// teardown so the id cache can be reclaimed.
    ///
    /// A `None` result is an ordinary negative probe, not an error.
    pub fn get(&self, view: &str) -> Option<Arc<dyn AttributeProvider>> {
        if let Some(provider) = self.singletons.get(view) {
            return Some(Arc::clone(provider));
        }
        if view == "unix" {
            return Some(Arc::new(UnixAttributeProvider::new()));
        }
        None
    }

    /// The recognized view names
    pub fn view_names(&self) -> &'static [&'static str] {
        VIEW_NAMES
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
