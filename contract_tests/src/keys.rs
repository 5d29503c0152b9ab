//! Wire key format contract tests
//!
//! The two-part `"<view>:<attribute>"` key is the sole textual contract
//! other layers use to address an attribute. These tests pin the format
//! and the canonical record keys a freshly created node carries.

/// The key separator; must never change
pub const KEY_SEPARATOR: char = ':';

/// The seven built-in view names, as other layers address them
pub const STABLE_VIEW_NAMES: &[&str] = &["basic", "owner", "posix", "unix", "dos", "acl", "user"];

/// Record keys every service-created node is guaranteed to carry
pub const STABLE_CREATION_KEYS: &[&str] = &[
    "basic:creationTime",
    "basic:lastModifiedTime",
    "basic:lastAccessTime",
    "owner:owner",
    "posix:group",
    "posix:permissions",
    "dos:readonly",
    "dos:hidden",
    "dos:archive",
    "dos:system",
    "acl:acl",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use attr_views::{KeyParser, VIEW_NAMES};
    use node_store::MetadataNode;

    #[test]
    fn test_view_name_set_is_stable() {
        assert_eq!(
            VIEW_NAMES, STABLE_VIEW_NAMES,
            "the recognized view-name set changed"
        );
    }

    #[test]
    fn test_key_splits_on_single_separator() {
        for view in STABLE_VIEW_NAMES {
            let key = format!("{}{}name", view, KEY_SEPARATOR);
            let (parsed_view, parsed_name) = KeyParser::split(&key).unwrap();
            assert_eq!(parsed_view, *view);
            assert_eq!(parsed_name, "name");
        }
    }

    #[test]
    fn test_malformed_keys_stay_malformed() {
        // anything that parses today but not tomorrow (or vice versa)
        // breaks callers; pin the rejected shapes
        for key in ["", "basicthing", ":x", "x:", "a:b:c", "a b:c", "a:b c"] {
            assert!(
                KeyParser::split(key).is_err(),
                "key {:?} must stay rejected",
                key
            );
        }
    }

    #[test]
    fn test_segment_charset_is_stable() {
        for segment in ["lastModifiedTime", "mime.type", "my-attr", "under_score", "x2"] {
            assert!(
                KeyParser::is_valid_segment(segment),
                "segment {:?} must stay accepted",
                segment
            );
        }
    }

    #[test]
    fn test_creation_populates_stable_keys() {
        let service = test_service();
        let node = test_node(&service);

        for key in STABLE_CREATION_KEYS {
            assert!(
                node.read_raw(key).is_some(),
                "creation must populate {}",
                key
            );
        }
    }
}
