//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! record data maps. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;
use uservault_core::record::DataMap;
use uservault_core::storage::StoreError;

/// Item attribute holding the partition key (the main key value).
pub const MAIN_KEY_ATTR: &str = "mainKey";
/// Item attribute holding the nested data map.
pub const DATA_ATTR: &str = "data";

/// Convert a record's main key and data map to a DynamoDB item.
pub fn record_to_item(main_key: &str, data: &DataMap) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        MAIN_KEY_ATTR.to_string(),
        AttributeValue::S(main_key.to_string()),
    );
    item.insert(DATA_ATTR.to_string(), data_to_attribute(data));
    item
}

/// Extract the data map from a DynamoDB item.
///
/// An item without a `data` attribute yields an empty map; a `data`
/// attribute that is not a map is invalid.
pub fn item_data(item: &HashMap<String, AttributeValue>) -> Result<DataMap, StoreError> {
    match item.get(DATA_ATTR) {
        None => Ok(DataMap::new()),
        Some(AttributeValue::M(map)) => map
            .iter()
            .map(|(key, attr)| Ok((key.clone(), attribute_to_value(attr)?)))
            .collect(),
        Some(other) => Err(StoreError::InvalidData(format!(
            "data attribute is not a map: {:?}",
            other
        ))),
    }
}

/// Convert a data map to a DynamoDB map attribute.
pub fn data_to_attribute(data: &DataMap) -> AttributeValue {
    AttributeValue::M(
        data.iter()
            .map(|(key, value)| (key.clone(), value_to_attribute(value)))
            .collect(),
    )
}

/// Convert a JSON value to its DynamoDB attribute representation.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(key, nested)| (key.clone(), value_to_attribute(nested)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to a JSON value.
///
/// String and number sets are read back as arrays; binary attributes have
/// no JSON representation and are rejected.
pub fn attribute_to_value(attr: &AttributeValue) -> Result<Value, StoreError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::N(number) => Ok(Value::Number(parse_number(number)?)),
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::L(items) => items.iter().map(attribute_to_value).collect(),
        AttributeValue::M(map) => map
            .iter()
            .map(|(key, nested)| Ok((key.clone(), attribute_to_value(nested)?)))
            .collect::<Result<serde_json::Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|number| Ok(Value::Number(parse_number(number)?)))
            .collect(),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidData(
            "binary attributes are not supported".to_string(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Parse a DynamoDB number string, keeping integers exact where possible.
fn parse_number(number: &str) -> Result<serde_json::Number, StoreError> {
    if let Ok(integer) = number.parse::<i64>() {
        return Ok(integer.into());
    }
    if let Ok(unsigned) = number.parse::<u64>() {
        return Ok(unsigned.into());
    }
    let float: f64 = number
        .parse()
        .map_err(|_| StoreError::InvalidData(format!("invalid number attribute: {}", number)))?;
    serde_json::Number::from_f64(float)
        .ok_or_else(|| StoreError::InvalidData(format!("non-finite number attribute: {}", number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> DataMap {
        let mut data = DataMap::new();
        data.insert("color".to_string(), json!("blue"));
        data.insert("age".to_string(), json!(42));
        data.insert("active".to_string(), json!(true));
        data.insert("nickname".to_string(), json!(null));
        data.insert("scores".to_string(), json!([1, 2.5, "three"]));
        data.insert(
            "address".to_string(),
            json!({"city": "Montevideo", "zip": "11300"}),
        );
        data
    }

    #[test]
    fn test_record_to_item_shape() {
        let item = record_to_item("u1", &sample_data());

        assert_eq!(item.get(MAIN_KEY_ATTR), Some(&AttributeValue::S("u1".to_string())));
        assert!(matches!(item.get(DATA_ATTR), Some(AttributeValue::M(_))));
    }

    #[test]
    fn test_data_round_trip() {
        let data = sample_data();
        let item = record_to_item("u1", &data);
        let parsed = item_data(&item).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_item_without_data_attribute_is_empty() {
        let mut item = HashMap::new();
        item.insert(
            MAIN_KEY_ATTR.to_string(),
            AttributeValue::S("u1".to_string()),
        );

        assert!(item_data(&item).unwrap().is_empty());
    }

    #[test]
    fn test_item_with_non_map_data_is_invalid() {
        let mut item = HashMap::new();
        item.insert(DATA_ATTR.to_string(), AttributeValue::S("oops".to_string()));

        assert!(matches!(
            item_data(&item),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_integer_precision_preserved() {
        let attr = value_to_attribute(&json!(i64::MAX));
        assert_eq!(attr, AttributeValue::N(i64::MAX.to_string()));

        let back = attribute_to_value(&attr).unwrap();
        assert_eq!(back, json!(i64::MAX));
    }

    #[test]
    fn test_large_unsigned_number() {
        let value = attribute_to_value(&AttributeValue::N(u64::MAX.to_string())).unwrap();
        assert_eq!(value, json!(u64::MAX));
    }

    #[test]
    fn test_float_number() {
        let value = attribute_to_value(&AttributeValue::N("2.5".to_string())).unwrap();
        assert_eq!(value, json!(2.5));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(attribute_to_value(&AttributeValue::N("not-a-number".to_string())).is_err());
    }

    #[test]
    fn test_string_set_reads_as_array() {
        let attr = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(attribute_to_value(&attr).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_number_set_reads_as_array() {
        let attr = AttributeValue::Ns(vec!["1".to_string(), "2".to_string()]);
        assert_eq!(attribute_to_value(&attr).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_binary_is_rejected() {
        let attr = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2, 3]));
        assert!(matches!(
            attribute_to_value(&attr),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_nested_structure_round_trip() {
        let value = json!({
            "profile": {
                "tags": ["a", {"deep": [null, false, 1.25]}],
                "count": 3
            }
        });

        let attr = value_to_attribute(&value);
        assert_eq!(attribute_to_value(&attr).unwrap(), value);
    }
}
