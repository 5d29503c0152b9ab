//! # Attribute Types
//!
//! This crate defines the value model for file attributes.
//!
//! ## Philosophy
//!
//! - **Typed values, not stringly-typed blobs**: every attribute carries an
//!   explicit tag that writes are checked against.
//! - **Explicit over implicit**: permission sets, principals, and ACL entries
//!   are distinct types that cannot be confused.
//! - **No host-OS emulation**: these types model what an in-memory file
//!   system reports, not any platform's on-disk encoding.
//!
//! ## Key Types
//!
//! - [`AttrValue`]: tagged value wrapper for attribute contents
//! - [`AttrTag`]: the discriminant used for type checking
//! - [`FileTime`]: nanosecond timestamp
//! - [`UserPrincipal`] / [`GroupPrincipal`]: named identities
//! - [`PermissionSet`]: set of POSIX permission bits
//! - [`AclEntry`]: one access-control entry

pub mod acl;
pub mod permissions;
pub mod principal;
pub mod time;
pub mod value;

pub use acl::{AclEntry, AclEntryKind};
pub use permissions::{PermissionSet, PosixPermission};
pub use principal::{GroupPrincipal, UserPrincipal};
pub use time::FileTime;
pub use value::{AttrTag, AttrValue};
