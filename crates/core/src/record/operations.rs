use serde_json::Value;

use super::types::DataMap;
use crate::storage::StoreError;

/// Sets a data key to a value, returning the previous value if one existed.
///
/// Last write wins: an existing value is replaced without any check.
pub fn set_value(data: &mut DataMap, data_key: &str, value: Value) -> Option<Value> {
    data.insert(data_key.to_string(), value)
}

/// Looks up a data key within a record's data map.
///
/// Fails with `DataKeyNotFound` when the key is absent.
pub fn lookup_value<'a>(
    data: &'a DataMap,
    main_key: &str,
    data_key: &str,
) -> Result<&'a Value, StoreError> {
    data.get(data_key).ok_or_else(|| StoreError::DataKeyNotFound {
        main_key: main_key.to_string(),
        data_key: data_key.to_string(),
    })
}

/// Removes a data key from a record's data map, returning the removed value.
///
/// Fails with `DataKeyNotFound` when the key is absent. Sibling keys are
/// left untouched.
pub fn remove_value(
    data: &mut DataMap,
    main_key: &str,
    data_key: &str,
) -> Result<Value, StoreError> {
    data.remove(data_key).ok_or_else(|| StoreError::DataKeyNotFound {
        main_key: main_key.to_string(),
        data_key: data_key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_value_inserts_and_replaces() {
        let mut data = DataMap::new();

        assert_eq!(set_value(&mut data, "color", json!("blue")), None);
        assert_eq!(
            set_value(&mut data, "color", json!("red")),
            Some(json!("blue"))
        );
        assert_eq!(data.get("color"), Some(&json!("red")));
    }

    #[test]
    fn test_lookup_value_present() {
        let mut data = DataMap::new();
        data.insert("color".to_string(), json!("blue"));

        assert_eq!(lookup_value(&data, "u1", "color").unwrap(), &json!("blue"));
    }

    #[test]
    fn test_lookup_value_absent() {
        let data = DataMap::new();

        let err = lookup_value(&data, "u1", "color").unwrap_err();
        assert_eq!(
            err,
            StoreError::DataKeyNotFound {
                main_key: "u1".to_string(),
                data_key: "color".to_string(),
            }
        );
    }

    #[test]
    fn test_remove_value_leaves_siblings() {
        let mut data = DataMap::new();
        data.insert("color".to_string(), json!("blue"));
        data.insert("size".to_string(), json!(42));

        let removed = remove_value(&mut data, "u1", "color").unwrap();
        assert_eq!(removed, json!("blue"));
        assert_eq!(data.get("size"), Some(&json!(42)));
        assert!(!data.contains_key("color"));
    }

    #[test]
    fn test_remove_value_absent() {
        let mut data = DataMap::new();

        assert!(remove_value(&mut data, "u1", "color").is_err());
    }
}
