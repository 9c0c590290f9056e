use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::dynamodb::encode;

/// Represents a DynamoDB item.
///
/// An item is a flat collection of named attributes, stored under a single
/// partition and sort key pair. Attribute values may themselves be lists or
/// maps, so the item carries whatever nesting the source data had.
///
/// The maximum item size in DynamoDB is 400 KB, including both attribute names
/// and values. Nothing here checks that; the store rejects oversized items.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) attributes: HashMap<String, AttributeValue>,
}

impl Item {
    /// Creates a new empty `Item`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one item out of a sequence of JSON objects.
    ///
    /// Every field of every record lands in the same item. When two records
    /// share a field name, the later record wins.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Map<String, Value>>,
    {
        records.into_iter().fold(Self::new(), |mut item, record| {
            for (key, value) in record {
                item.insert_json(key.as_str(), value);
            }
            item
        })
    }

    /// Encodes `value` and stores it under `key`, replacing any previous value.
    pub fn insert_json(&mut self, key: impl Into<String>, value: &Value) {
        self.attributes.insert(key.into(), encode(value));
    }

    /// Gets the raw attribute value stored under `key`.
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Number of top-level attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the item has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
