use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::error::MondayResult;

/// Builders for the values monday.com expects when writing columns.
pub struct ColumnValuesBuilder;

impl ColumnValuesBuilder {
    /// Text column
    pub fn text(text: &str) -> Value {
        Value::String(text.to_string())
    }

    /// Numbers column. monday.com takes numbers as strings.
    pub fn number(value: impl ToString) -> Value {
        Value::String(value.to_string())
    }

    /// Date column from a calendar date
    pub fn date(date: NaiveDate) -> Value {
        json!({ "date": date.format("%Y-%m-%d").to_string() })
    }

    /// Date column with a time of day
    pub fn date_time(date_time: NaiveDateTime) -> Value {
        json!({
            "date": date_time.format("%Y-%m-%d").to_string(),
            "time": date_time.format("%H:%M:%S").to_string(),
        })
    }

    /// Date column from an already formatted `YYYY-MM-DD` string
    pub fn date_str(date: &str) -> Value {
        json!({ "date": date })
    }

    pub fn status(label: &str) -> Value {
        json!({ "label": label })
    }

    pub fn dropdown(labels: &[&str]) -> Value {
        json!({ "labels": labels })
    }

    pub fn link(url: &str, text: &str) -> Value {
        json!({ "url": url, "text": text })
    }

    pub fn email(email: &str, text: &str) -> Value {
        json!({ "email": email, "text": text })
    }

    /// People column from user IDs
    pub fn people(person_ids: &[u64]) -> Value {
        let persons: Vec<Value> = person_ids
            .iter()
            .map(|id| json!({ "id": id, "kind": "person" }))
            .collect();
        json!({ "personsAndTeams": persons })
    }

    pub fn country(country_code: &str, country_name: &str) -> Value {
        json!({ "countryCode": country_code, "countryName": country_name })
    }

    /// Serialize a column ID to value map into the JSON string the
    /// `column_values` argument takes.
    pub fn json(values: &BTreeMap<String, Value>) -> MondayResult<String> {
        Ok(serde_json::to_string(values)?)
    }
}
