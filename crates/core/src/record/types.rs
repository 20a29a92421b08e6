use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The nested data map of a record: data keys mapped to arbitrary
/// JSON-serializable values (string, number, bool, null, array, nested map).
pub type DataMap = serde_json::Map<String, Value>;

/// One row in the table, keyed by main key, holding a nested data map.
///
/// The main key is immutable once the record is created; data keys are
/// unique within a record and carry no ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub main_key: String,
    pub data: DataMap,
}

impl Record {
    /// Creates an empty record for the given main key.
    pub fn new(main_key: impl Into<String>) -> Self {
        Self {
            main_key: main_key.into(),
            data: DataMap::new(),
        }
    }

    /// Creates a record with an existing data map.
    pub fn with_data(main_key: impl Into<String>, data: DataMap) -> Self {
        Self {
            main_key: main_key.into(),
            data,
        }
    }

    /// Looks up a data key, if present.
    pub fn get(&self, data_key: &str) -> Option<&Value> {
        self.data.get(data_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("u1");
        assert_eq!(record.main_key, "u1");
        assert!(record.data.is_empty());
    }

    #[test]
    fn test_get_returns_stored_value() {
        let mut data = DataMap::new();
        data.insert("color".to_string(), json!("blue"));
        let record = Record::with_data("u1", data);

        assert_eq!(record.get("color"), Some(&json!("blue")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = Record::new("u1");
        let serialized = serde_json::to_value(&record).unwrap();

        assert!(serialized.get("mainKey").is_some());
        assert!(serialized.get("data").is_some());
    }
}
