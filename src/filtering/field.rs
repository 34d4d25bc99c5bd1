// ABOUTME: Typed field values and the Filterable trait used by filter and sort stages
// ABOUTME: Resolves case- and separator-insensitive keys on models and JSON records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use pierre_state_core::models::{Item, TemporalEntity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// A comparable field value
///
/// Deserialization is untagged: JSON booleans, numbers, RFC 3339 strings,
/// other strings, and string arrays map to the variants in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag, `false < true`
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// Point in time
    Date(DateTime<Utc>),
    /// Text
    Text(String),
    /// List of text values such as tags
    List(Vec<String>),
}

impl FieldValue {
    /// Order between kinds when two values of different kinds are compared
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
            Self::List(_) => 4,
        }
    }

    /// Total order used by the sort stage
    ///
    /// Text compares case-folded first and ordinally second, so "apple" sorts
    /// next to "Apple" while the order stays total.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => compare_text(a, b),
            (Self::List(a), Self::List(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| compare_text(x, y))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Equality used by filters; a list matches when it contains the expected text
    ///
    /// Text that parses as a date (`YYYY-MM-DD` or RFC 3339) equals the same
    /// instant held as a date, so criteria read from JSON match JSON records.
    #[must_use]
    pub fn matches(&self, expected: &Self) -> bool {
        match (self, expected) {
            (Self::List(values), Self::Text(wanted)) => values.iter().any(|v| v == wanted),
            (Self::Number(a), Self::Number(b)) => (a - b).abs() < f64::EPSILON,
            (Self::Date(date), Self::Text(text)) | (Self::Text(text), Self::Date(date)) => {
                parse_date(text).is_some_and(|parsed| parsed == *date)
            }
            _ => self == expected,
        }
    }

    /// Text fragments searched by substring filters
    #[must_use]
    pub fn text_fragments(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => vec![text.as_str()],
            Self::List(values) => values.iter().map(String::as_str).collect(),
            Self::Bool(_) | Self::Number(_) | Self::Date(_) => Vec::new(),
        }
    }

    /// The value as a date, if it is one
    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Normalize a field key: lowercase, with `_`, `-` and spaces removed
///
/// `startAt`, `start_at` and `START-AT` all normalize to `startat`.
#[must_use]
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse an ISO-8601 timestamp (RFC 3339) or calendar date (`YYYY-MM-DD`, midnight UTC)
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

/// A record whose fields can be read by name
pub trait Filterable {
    /// Value of the field at `key`, or `None` when the field is absent
    ///
    /// Implementations should match keys through [`normalize_key`].
    fn field(&self, key: &str) -> Option<FieldValue>;
}

impl Filterable for Item {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match normalize_key(key).as_str() {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "durationseconds" | "duration" => self.duration_seconds.map(FieldValue::from),
            "restseconds" | "rest" => self.rest_seconds.map(FieldValue::from),
            "totalseconds" => Some(FieldValue::Number(self.total_seconds() as f64)),
            "calories" => self.calories.map(FieldValue::from),
            "weight" => self.weight.map(FieldValue::from),
            "tags" => Some(FieldValue::List(self.tags.clone())),
            _ => None,
        }
    }
}

impl Filterable for TemporalEntity {
    fn field(&self, key: &str) -> Option<FieldValue> {
        match normalize_key(key).as_str() {
            "id" => Some(FieldValue::from(self.id.as_str())),
            "title" | "name" => Some(FieldValue::from(self.title.as_str())),
            "kind" | "type" => Some(FieldValue::from(self.kind.as_str())),
            "sport" => self.sport.as_deref().map(FieldValue::from),
            "location" => self.location.as_deref().map(FieldValue::from),
            "startat" | "start" | "date" => Some(FieldValue::from(self.start_at)),
            "endat" | "end" => Some(FieldValue::from(self.end_at)),
            "registrationdeadlineat" | "deadline" => {
                Some(FieldValue::from(self.registration_deadline_at))
            }
            "capacity" => Some(FieldValue::from(self.capacity)),
            "registeredcount" | "registered" => Some(FieldValue::from(self.registered_count)),
            "spotsremaining" => Some(FieldValue::from(self.spots_remaining())),
            "isfull" | "full" => Some(FieldValue::Bool(self.registered_count >= self.capacity)),
            "tags" => Some(FieldValue::List(self.tags.clone())),
            _ => None,
        }
    }
}

impl Filterable for Value {
    /// Dotted paths (`organizer.name`, `modules.0.title`) with normalized segment matching
    fn field(&self, key: &str) -> Option<FieldValue> {
        let mut current = self;
        for segment in key.split('.') {
            current = match current {
                Value::Object(map) => {
                    let wanted = normalize_key(segment);
                    map.iter()
                        .find(|(name, _)| normalize_key(name) == wanted)
                        .map(|(_, value)| value)?
                }
                Value::Array(values) => values.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        json_to_field(current)
    }
}

fn json_to_field(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Bool(flag) => Some(FieldValue::Bool(*flag)),
        Value::Number(number) => number.as_f64().map(FieldValue::Number),
        Value::String(text) => Some(
            parse_date(text).map_or_else(|| FieldValue::Text(text.clone()), FieldValue::Date),
        ),
        Value::Array(values) => Some(FieldValue::List(
            values
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(text) => Some(text.clone()),
                    Value::Number(number) => Some(number.to_string()),
                    Value::Bool(flag) => Some(flag.to_string()),
                    Value::Null | Value::Array(_) | Value::Object(_) => None,
                })
                .collect(),
        )),
        Value::Null | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_key_variants() {
        assert_eq!(normalize_key("startAt"), "startat");
        assert_eq!(normalize_key("start_at"), "startat");
        assert_eq!(normalize_key("START-AT"), "startat");
    }

    #[test]
    fn test_json_dotted_path_and_dates() {
        let record = json!({
            "Organizer": { "display_name": "City Club" },
            "startAt": "2025-06-01",
            "tags": ["outdoor", 5]
        });
        assert_eq!(
            record.field("organizer.displayName"),
            Some(FieldValue::Text("City Club".into()))
        );
        assert!(matches!(record.field("start_at"), Some(FieldValue::Date(_))));
        assert_eq!(
            record.field("tags"),
            Some(FieldValue::List(vec!["outdoor".into(), "5".into()]))
        );
        assert_eq!(record.field("missing.path"), None);
    }

    #[test]
    fn test_plain_date_text_matches_date_value() {
        let recorded = json!({ "date": "2025-06-01" }).field("date");
        let wanted = FieldValue::Text("2025-06-01".into());
        assert!(recorded.is_some_and(|value| value.matches(&wanted)));
        let midnight = FieldValue::Date(DateTime::<Utc>::MIN_UTC);
        assert!(!FieldValue::Text("not a date".into()).matches(&midnight));
    }

    #[test]
    fn test_cross_kind_comparison_is_total() {
        let text = FieldValue::Text("a".into());
        let number = FieldValue::Number(1.0);
        assert_eq!(number.compare(&text), Ordering::Less);
        assert_eq!(text.compare(&number), Ordering::Greater);
    }
}
