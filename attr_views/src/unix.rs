//! The `unix` attribute view
//!
//! Read-only numeric attributes derived from the stored owner, group, and
//! permission values. The provider assigns stable uid/gid/ino numbers on
//! first sight of each principal or node and caches them for its own
//! lifetime, so one instance must serve exactly one file system: sharing
//! an instance would leak identifiers between file systems, and holding
//! one past its file system's teardown would keep the cache alive.

use crate::error::AttrError;
use crate::provider::{read_only, read_stored, unsupported, AttributeProvider, CreationContext};
use attr_types::{AttrTag, AttrValue};
use node_store::{MetadataNode, NodeKind};
use std::collections::BTreeMap;
use std::sync::Mutex;
use uuid::Uuid;

const VIEW: &str = "unix";

const SUPPORTED: &[&str] = &["uid", "gid", "ino", "dev", "rdev", "nlink", "mode", "ctime"];

const INHERITS: &[&str] = &["basic", "owner", "posix"];

/// The single in-memory device number
const DEV: u64 = 1;

/// What an id was assigned for
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CacheKey {
    User(String),
    Group(String),
    Node(Uuid),
}

/// Sequential id assignment, one sequence per provider instance
#[derive(Debug, Default)]
struct IdCache {
    ids: BTreeMap<CacheKey, u64>,
    next: u64,
}

impl IdCache {
    fn get_or_assign(&mut self, key: CacheKey) -> u64 {
        if let Some(id) = self.ids.get(&key) {
            return *id;
        }
        let id = self.next;
        self.next += 1;
        self.ids.insert(key, id);
        id
    }
}

/// Provider for the `unix` view
///
/// Unlike the other providers this one is stateful; the registry hands out
/// a fresh instance per lookup instead of a shared singleton.
#[derive(Debug, Default)]
pub struct UnixAttributeProvider {
    cache: Mutex<IdCache>,
}

impl UnixAttributeProvider {
    /// Creates a provider with an empty id cache
    pub fn new() -> Self {
        Self::default()
    }

    fn assign(&self, key: CacheKey) -> u64 {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.get_or_assign(key)
    }

    fn stored_principal_id(
        &self,
        node: &dyn MetadataNode,
        view: &str,
        name: &str,
    ) -> Result<u64, AttrError> {
        let value = read_stored(node, view, name)?;
        match &value {
            AttrValue::User(user) => Ok(self.assign(CacheKey::User(user.name().to_string()))),
            AttrValue::Group(group) => Ok(self.assign(CacheKey::Group(group.name().to_string()))),
            other => Err(AttrError::TypeMismatch {
                view: view.to_string(),
                name: name.to_string(),
                expected: if name == "group" {
                    AttrTag::Group
                } else {
                    AttrTag::User
                },
                actual: other.tag(),
            }),
        }
    }
}

impl AttributeProvider for UnixAttributeProvider {
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
        match name {
            "uid" => Ok(AttrValue::Int(
                self.stored_principal_id(node, "owner", "owner")?,
            )),
            "gid" => Ok(AttrValue::Int(
                self.stored_principal_id(node, "posix", "group")?,
            )),
            "ino" => Ok(AttrValue::Int(
                self.assign(CacheKey::Node(node.id().as_uuid())),
            )),
            "dev" => Ok(AttrValue::Int(DEV)),
            "rdev" => Ok(AttrValue::Int(0)),
            // the node store does not model hard links
            "nlink" => Ok(AttrValue::Int(1)),
            "mode" => {
                if node.kind() == NodeKind::Symlink {
                    return Err(AttrError::NodeKindMismatch {
                        view: VIEW.to_string(),
                        name: name.to_string(),
                        kind: node.kind(),
                    });
                }
                let permissions = read_stored(node, "posix", "permissions")?;
                match permissions.as_permissions() {
                    Some(set) => Ok(AttrValue::Int(u64::from(set.mode()))),
                    None => Err(AttrError::TypeMismatch {
                        view: "posix".to_string(),
                        name: "permissions".to_string(),
                        expected: AttrTag::Permissions,
                        actual: permissions.tag(),
                    }),
                }
            }
            "ctime" => read_stored(node, "basic", "creationTime"),
            _ => Err(unsupported(VIEW, name)),
        }
    }

    fn set(
        &self,
        _node: &mut dyn MetadataNode,
        name: &str,
        _value: AttrValue,
    ) -> Result<(), AttrError> {
        if SUPPORTED.contains(&name) {
            Err(read_only(VIEW, name))
        } else {
            Err(unsupported(VIEW, name))
        }
    }

    fn defaults(&self, _ctx: &CreationContext) -> Vec<(&'static str, AttrValue)> {
        // everything here is derived from other views' stored values
        Vec::new()
    }
}
