//! View protocol contract tests
//!
//! Cross-crate checks of the registry's per-view instantiation policy and
//! the composition resolver's visible behavior.

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use attr_types::{AttrValue, UserPrincipal};
    use attr_views::{AttrError, ProviderRegistry, ViewResolver};
    use node_store::NodeKind;
    use services_attributes::NodeAttributeOperations;
    use std::sync::Arc;

    #[test]
    fn test_instantiation_policy_table() {
        let registry = ProviderRegistry::new();

        // singleton views
        for view in ["basic", "owner", "posix", "dos", "acl", "user"] {
            let first = registry.get(view).unwrap();
            let second = registry.get(view).unwrap();
            assert!(Arc::ptr_eq(&first, &second), "{} must stay a singleton", view);
        }

        // per-owner-fresh view
        let first = registry.get("unix").unwrap();
        let second = registry.get("unix").unwrap();
        assert!(!Arc::ptr_eq(&first, &second), "unix must stay per-owner-fresh");
    }

    #[test]
    fn test_registry_probe_is_not_an_error() {
        let registry = ProviderRegistry::new();
        assert!(registry.get("ntfs").is_none());
    }

    #[test]
    fn test_composed_read_resolves_like_direct_read() {
        let service = test_service();
        let mut node = test_node(&service);

        service
            .set_attribute(
                &mut node,
                "owner:owner",
                AttrValue::User(UserPrincipal::new("carol")),
            )
            .unwrap();

        let direct = service.get_attribute(&node, "owner:owner").unwrap();
        let composed = service.get_attribute(&node, "posix:owner").unwrap();
        let deep = service.get_attribute(&node, "unix:owner").unwrap();

        assert_eq!(direct, composed);
        assert_eq!(direct, deep);
    }

    #[test]
    fn test_listing_has_no_duplicates_and_merges_chain() {
        let registry = ProviderRegistry::new();
        let resolver = ViewResolver::new(&registry);

        let posix = resolver.list_attributes("posix").unwrap();
        // direct
        assert!(posix.contains("permissions"));
        // via owner
        assert!(posix.contains("owner"));
        // via basic
        assert!(posix.contains("size"));

        // a set cannot hold duplicates; pin the exact cardinality instead
        assert_eq!(posix.len(), 2 + 1 + 9);
    }

    #[test]
    fn test_error_taxonomy_is_stable() {
        let service = test_service();
        let mut node = test_node(&service);

        assert!(matches!(
            service.get_attribute(&node, "bogus:thing").unwrap_err(),
            AttrError::UnknownView(_)
        ));
        assert!(matches!(
            service.get_attribute(&node, "basic:bogus").unwrap_err(),
            AttrError::Unsupported { .. }
        ));
        assert!(matches!(
            service.get_attribute(&node, "basicthing").unwrap_err(),
            AttrError::MalformedName(_)
        ));
        assert!(matches!(
            service
                .set_attribute(&mut node, "basic:size", AttrValue::Int(10))
                .unwrap_err(),
            AttrError::ReadOnly { .. }
        ));
        assert!(matches!(
            service
                .set_attribute(&mut node, "dos:hidden", AttrValue::Int(1))
                .unwrap_err(),
            AttrError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_symlink_permission_restriction() {
        let service = test_service();
        let symlink = service.create_node(NodeKind::Symlink, 0);

        assert!(matches!(
            service
                .get_attribute(&symlink, "posix:permissions")
                .unwrap_err(),
            AttrError::NodeKindMismatch { .. }
        ));
    }
}
