//! Attribute value serialization contract tests
//!
//! Attribute values cross crate boundaries in serialized form (snapshots,
//! debugging dumps, future remote surfaces). These tests pin the JSON
//! shapes so they don't drift.

#[cfg(test)]
mod tests {
    use attr_types::{
        AclEntry, AclEntryKind, AttrValue, FileTime, PermissionSet, UserPrincipal,
    };
    use serde_json::json;

    #[test]
    fn test_scalar_value_shapes() {
        assert_eq!(
            serde_json::to_value(AttrValue::Int(42)).unwrap(),
            json!({ "Int": 42 })
        );
        assert_eq!(
            serde_json::to_value(AttrValue::Bool(true)).unwrap(),
            json!({ "Bool": true })
        );
        assert_eq!(
            serde_json::to_value(AttrValue::Time(FileTime::from_nanos(1_000))).unwrap(),
            json!({ "Time": 1000 })
        );
        assert_eq!(
            serde_json::to_value(AttrValue::Text("x".to_string())).unwrap(),
            json!({ "Text": "x" })
        );
    }

    #[test]
    fn test_bytes_shape() {
        assert_eq!(
            serde_json::to_value(AttrValue::Bytes(vec![1, 2, 3])).unwrap(),
            json!({ "Bytes": [1, 2, 3] })
        );
    }

    #[test]
    fn test_principal_shapes() {
        assert_eq!(
            serde_json::to_value(AttrValue::User(UserPrincipal::new("alice"))).unwrap(),
            json!({ "User": "alice" })
        );
    }

    #[test]
    fn test_permission_set_shape() {
        let value = AttrValue::Permissions(PermissionSet::from_mode(0o600));
        assert_eq!(
            serde_json::to_value(value).unwrap(),
            json!({ "Permissions": ["OwnerRead", "OwnerWrite"] })
        );
    }

    #[test]
    fn test_acl_entry_shape() {
        let entry = AclEntry::new(AclEntryKind::Allow, UserPrincipal::new("alice"))
            .with_permission("READ_DATA");
        assert_eq!(
            serde_json::to_value(AttrValue::Acl(vec![entry])).unwrap(),
            json!({
                "Acl": [{
                    "kind": "Allow",
                    "principal": "alice",
                    "permissions": ["READ_DATA"]
                }]
            })
        );
    }

    #[test]
    fn test_round_trip_through_json() {
        let values = vec![
            AttrValue::Int(7),
            AttrValue::Time(FileTime::from_nanos(123)),
            AttrValue::Permissions(PermissionSet::from_mode(0o755)),
            AttrValue::User(UserPrincipal::new("bob")),
        ];
        for value in values {
            let encoded = serde_json::to_string(&value).unwrap();
            let decoded: AttrValue = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, value);
        }
    }
}
