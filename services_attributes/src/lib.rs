//! # Attribute Service
//!
//! This crate provides the metadata service a file-system-operations layer
//! talks to: one object per file system that resolves attribute requests,
//! applies creation-time defaults, and exposes bulk reads.
//!
//! ## Design
//!
//! - One [`MetadataService`] per file system. Constructing it snapshots
//!   the provider set (including the file system's private `unix`
//!   provider) for the file system's entire lifetime.
//! - Node creation goes through the service so every applicable view's
//!   defaults land in the node's attribute record.
//! - All failures are the attribute layer's own typed errors; the service
//!   translates nothing.

pub mod operations;
pub mod service;

pub use operations::NodeAttributeOperations;
pub use service::MetadataService;
