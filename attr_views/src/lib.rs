//! # Attribute Views
//!
//! This crate implements the attribute-view protocol of the metadata
//! layer: a uniform, pluggable way to read and write file attributes
//! through named views.
//!
//! ## Philosophy
//!
//! - **Views are policy tables, not OS emulation**: each provider declares
//!   what it answers for and how values are typed; it does not replicate
//!   any host platform's encoding.
//! - **Inheritance is declared, not implied**: a view names the views it
//!   composes, and the resolver walks that acyclic graph explicitly.
//! - **No hidden global state**: the registry is a value built once by its
//!   owner; after construction it is immutable and safe to share.
//! - **Typed access everywhere**: writes are checked against each
//!   attribute's declared tag before they touch a node.
//!
//! ## The built-in views
//!
//! | view    | direct attributes                              | inherits            |
//! |---------|------------------------------------------------|---------------------|
//! | `basic` | times, size, kind flags, fileKey               | —                   |
//! | `owner` | owner                                          | —                   |
//! | `posix` | group, permissions                             | owner, basic        |
//! | `dos`   | readonly, hidden, archive, system              | basic               |
//! | `acl`   | acl                                            | owner, basic        |
//! | `user`  | open-ended, stored as bytes                    | —                   |
//! | `unix`  | uid, gid, ino, dev, rdev, nlink, mode, ctime   | basic, owner, posix |
//!
//! All views resolve to shared singletons except `unix`, which is built
//! fresh per file system because it caches stable id assignments.
//!
//! ## Example
//!
//! ```
//! use attr_views::{ProviderRegistry, ViewResolver};
//! use attr_types::AttrValue;
//! use node_store::{Node, NodeKind};
//!
//! let registry = ProviderRegistry::new();
//! let resolver = ViewResolver::new(&registry);
//!
//! let mut node = Node::new(NodeKind::Regular);
//! node.set_content_size(42);
//!
//! let size = resolver.get_attribute(&node, "basic:size").unwrap();
//! assert_eq!(size, AttrValue::Int(42));
//! ```

pub mod acl;
pub mod basic;
pub mod dos;
pub mod error;
pub mod key;
pub mod owner;
pub mod posix;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod unix;
pub mod user;

pub use acl::AclAttributeProvider;
pub use basic::BasicAttributeProvider;
pub use dos::DosAttributeProvider;
pub use error::AttrError;
pub use key::KeyParser;
pub use owner::OwnerAttributeProvider;
pub use posix::PosixAttributeProvider;
pub use provider::{AttributeProvider, CreationContext};
pub use registry::{ProviderRegistry, VIEW_NAMES};
pub use resolver::ViewResolver;
pub use unix::UnixAttributeProvider;
pub use user::UserDefinedAttributeProvider;
