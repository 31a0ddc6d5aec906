use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level body returned by the timesheet API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimesheetResponse {
    #[serde(rename = "DataList", default)]
    pub data_list: Option<Vec<TimesheetRecord>>,
}

impl TimesheetResponse {
    pub fn into_records(self) -> Vec<TimesheetRecord> {
        self.data_list.unwrap_or_default()
    }
}

/// One punch as delivered by the portal.
///
/// Field names differ between API variants (`nTotalHours` vs
/// `nDailyTotalHours` vs `nWeeklyHours`, …), so the record keeps the raw
/// JSON object and the active [`Profile`](super::Profile) decides which keys
/// to read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimesheetRecord {
    fields: Map<String, Value>,
}

/// Result of reading a numeric field.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberField {
    Missing,
    Number(f64),
    /// Present but not numeric; carries the raw text.
    Invalid(String),
}

impl NumberField {
    pub fn or_zero(&self) -> f64 {
        match self {
            NumberField::Number(n) => *n,
            _ => 0.0,
        }
    }
}

impl TimesheetRecord {
    /// Non-null value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// String view of a scalar field; numbers and booleans are stringified.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// First non-empty text among `keys`.
    pub fn first_text(&self, keys: &[String]) -> Option<String> {
        keys.iter()
            .filter_map(|k| self.text(k))
            .find(|s| !s.trim().is_empty())
    }

    pub fn number(&self, key: &str) -> NumberField {
        match self.get(key) {
            None => NumberField::Missing,
            Some(Value::Number(n)) => n
                .as_f64()
                .map(NumberField::Number)
                .unwrap_or_else(|| NumberField::Invalid(n.to_string())),
            Some(Value::String(s)) if s.trim().is_empty() => NumberField::Missing,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(NumberField::Number)
                .unwrap_or_else(|_| NumberField::Invalid(s.clone())),
            Some(other) => NumberField::Invalid(other.to_string()),
        }
    }

    /// First present numeric field among `keys`.
    pub fn first_number(&self, keys: &[String]) -> NumberField {
        keys.iter()
            .map(|k| self.number(k))
            .find(|n| !matches!(n, NumberField::Missing))
            .unwrap_or(NumberField::Missing)
    }

    /// Group values gathered from each list in `lists`, in order.
    /// Entries that are not group objects are skipped.
    pub fn group_values(&self, lists: &[String]) -> Vec<GroupValue> {
        lists
            .iter()
            .filter_map(|name| self.get(name).and_then(Value::as_array))
            .flatten()
            .filter_map(|v| serde_json::from_value::<GroupValue>(v.clone()).ok())
            .collect()
    }
}

/// Tagged attribute attached to a punch (account, facility, activity…).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupValue {
    #[serde(rename = "iGroupNumber", default)]
    pub group_number: Option<i64>,
    #[serde(rename = "cGroupValue", default)]
    pub value: Option<String>,
    #[serde(rename = "cGroupValueDescription", default)]
    pub description: Option<String>,
}
