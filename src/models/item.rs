use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
pub struct RawItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub column_values: Vec<RawColumnValue>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawColumnValue {
    pub id: String,
    pub text: Option<String>,
    /// JSON encoded column value, as monday.com sends it.
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub column: Option<ColumnMeta>,
    #[serde(default)]
    pub linked_items: Option<Vec<RawItem>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ColumnMeta {
    pub title: Option<String>,
}

/// An item with its column values flattened.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub values: Vec<ColumnValue>,
}

impl Item {
    pub fn value(&self, column_id: &str) -> Option<&ColumnValue> {
        self.values.iter().find(|v| v.id == column_id)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ColumnValue {
    pub id: String,
    pub text: Option<String>,
    pub value: Value,
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "linkedItems", skip_serializing_if = "Option::is_none")]
    pub linked_items: Option<Vec<Item>>,
}
