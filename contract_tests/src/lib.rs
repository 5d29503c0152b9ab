//! # Attribute Contract Tests
//!
//! This crate provides "golden" tests for the attribute layer's stable
//! contracts to ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: stable contracts are written as code
//! - **Testability first**: contract tests fail when interfaces change
//! - **Mechanism not policy**: define what must be stable, not how to use it
//!
//! ## Structure
//!
//! - [`keys`]: the `"view:attribute"` wire key format and the canonical
//!   record keys populated at node creation
//! - [`values`]: the serde serialization shape of attribute values
//! - [`views`]: the cross-crate behavior of the registry's instantiation
//!   policy and the view-composition resolver

pub mod keys;
pub mod values;
pub mod views;

/// Common helpers for contract validation
pub mod test_helpers {
    use attr_views::{CreationContext, ProviderRegistry};
    use node_store::{Node, NodeKind};
    use services_attributes::MetadataService;

    /// Creates a service with the conventional defaults
    pub fn test_service() -> MetadataService {
        MetadataService::new(&ProviderRegistry::new(), CreationContext::new(0))
    }

    /// Creates a fully initialized regular-file node
    pub fn test_node(service: &MetadataService) -> Node {
        service.create_node(NodeKind::Regular, 1_000)
    }
}
