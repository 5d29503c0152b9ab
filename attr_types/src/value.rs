//! Tagged attribute values

use crate::acl::AclEntry;
use crate::permissions::PermissionSet;
use crate::principal::{GroupPrincipal, UserPrincipal};
use crate::time::FileTime;
use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The type tag of an [`AttrValue`]
///
/// Used by providers to reject writes whose value does not match the
/// attribute's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrTag {
    Time,
    Int,
    Bool,
    Text,
    Bytes,
    User,
    Group,
    Permissions,
    Acl,
    Id,
}

impl fmt::Display for AttrTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttrTag::Time => "time",
            AttrTag::Int => "int",
            AttrTag::Bool => "bool",
            AttrTag::Text => "text",
            AttrTag::Bytes => "bytes",
            AttrTag::User => "user",
            AttrTag::Group => "group",
            AttrTag::Permissions => "permissions",
            AttrTag::Acl => "acl",
            AttrTag::Id => "id",
        };
        write!(f, "{}", name)
    }
}

/// A single attribute value, tagged with its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Timestamp
    Time(FileTime),
    /// Unsigned integer (sizes, unix ids, modes, link counts)
    Int(u64),
    /// Boolean flag
    Bool(bool),
    /// Short text
    Text(String),
    /// Opaque byte payload (user-defined attributes)
    Bytes(Vec<u8>),
    /// User identity
    User(UserPrincipal),
    /// Group identity
    Group(GroupPrincipal),
    /// POSIX permission set
    Permissions(PermissionSet),
    /// Access-control list
    Acl(Vec<AclEntry>),
    /// Opaque file key
    Id(Uuid),
}

impl AttrValue {
    /// Returns this value's type tag
    pub fn tag(&self) -> AttrTag {
        match self {
            AttrValue::Time(_) => AttrTag::Time,
            AttrValue::Int(_) => AttrTag::Int,
            AttrValue::Bool(_) => AttrTag::Bool,
            AttrValue::Text(_) => AttrTag::Text,
            AttrValue::Bytes(_) => AttrTag::Bytes,
            AttrValue::User(_) => AttrTag::User,
            AttrValue::Group(_) => AttrTag::Group,
            AttrValue::Permissions(_) => AttrTag::Permissions,
            AttrValue::Acl(_) => AttrTag::Acl,
            AttrValue::Id(_) => AttrTag::Id,
        }
    }

    /// Returns the timestamp if this is a `Time` value
    pub fn as_time(&self) -> Option<FileTime> {
        match self {
            AttrValue::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int` value
    pub fn as_int(&self) -> Option<u64> {
        match self {
            AttrValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the flag if this is a `Bool` value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the payload if this is a `Bytes` value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            AttrValue::Bytes(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the user if this is a `User` value
    pub fn as_user(&self) -> Option<&UserPrincipal> {
        match self {
            AttrValue::User(user) => Some(user),
            _ => None,
        }
    }

    /// Returns the group if this is a `Group` value
    pub fn as_group(&self) -> Option<&GroupPrincipal> {
        match self {
            AttrValue::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the permission set if this is a `Permissions` value
    pub fn as_permissions(&self) -> Option<&PermissionSet> {
        match self {
            AttrValue::Permissions(permissions) => Some(permissions),
            _ => None,
        }
    }

    /// Returns the entries if this is an `Acl` value
    pub fn as_acl(&self) -> Option<&[AclEntry]> {
        match self {
            AttrValue::Acl(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the key if this is an `Id` value
    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            AttrValue::Id(id) => Some(*id),
            _ => None,
        }
    }
}
