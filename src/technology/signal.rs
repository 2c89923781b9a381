//! Technology signals from the fingerprinting feed.
//!
//! The feed is loosely typed: categories arrive as strings, lists or null,
//! and timestamps as epoch milliseconds, numeric strings, bare years or
//! RFC 3339 text. Parsing coerces what it can and records a diagnostic for
//! everything it had to skip or substitute.

use crate::core::Assessed;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologySignal {
    pub name: String,
    pub category: String,
    pub first_detected: Option<DateTime<Utc>>,
    pub last_detected: Option<DateTime<Utc>>,
}

impl TechnologySignal {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            first_detected: None,
            last_detected: None,
        }
    }

    pub fn last_seen(mut self, at: DateTime<Utc>) -> Self {
        self.last_detected = Some(at);
        self
    }

    /// Lowercased "name category", the text signatures are matched against
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.category).to_lowercase()
    }
}

fn field<'a>(object: &'a serde_json::Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| object.get(*name))
        .filter(|v| !v.is_null())
}

fn coerce_category(value: Option<&Value>, name: &str, diagnostics: &mut Vec<String>) -> String {
    match value {
        None => UNKNOWN_CATEGORY.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => UNKNOWN_CATEGORY.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            if parts.is_empty() {
                UNKNOWN_CATEGORY.to_string()
            } else {
                parts.join(", ")
            }
        }
        Some(other) => {
            diagnostics.push(format!(
                "Technology '{}': category {} is not text; stringified",
                name, other
            ));
            other.to_string()
        }
    }
}

/// Interpret a number as a bare year (1900-2100) or epoch milliseconds
fn timestamp_from_number(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    if (1900.0..=2100.0).contains(&value) && value.fract() == 0.0 {
        return Utc.with_ymd_and_hms(value as i32, 1, 1, 0, 0, 0).single();
    }
    Utc.timestamp_millis_opt(value as i64).single()
}

/// Coerce a feed timestamp into a UTC instant
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_f64().and_then(timestamp_from_number),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(number) = s.parse::<f64>() {
                return timestamp_from_number(number);
            }
            if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
                return Some(parsed.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| Utc.from_utc_datetime(&dt))
        }
        _ => None,
    }
}

fn coerce_timestamp(
    value: Option<&Value>,
    label: &str,
    name: &str,
    diagnostics: &mut Vec<String>,
) -> Option<DateTime<Utc>> {
    let value = value?;
    let parsed = parse_timestamp(value);
    if parsed.is_none() {
        diagnostics.push(format!(
            "Technology '{}': unreadable {} timestamp {}",
            name, label, value
        ));
    }
    parsed
}

fn parse_one(index: usize, value: &Value, diagnostics: &mut Vec<String>) -> Option<TechnologySignal> {
    let Some(object) = value.as_object() else {
        diagnostics.push(format!(
            "Technology entry {} is not an object; skipped",
            index
        ));
        return None;
    };

    let name = match field(object, &["name", "Name"]) {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => {
            diagnostics.push(format!("Technology entry {} has no name; skipped", index));
            return None;
        }
    };

    let category = coerce_category(
        field(object, &["category", "categories", "Category", "tag", "Tag"]),
        &name,
        diagnostics,
    );
    let first_detected = coerce_timestamp(
        field(object, &["first_detected", "firstDetected", "FirstDetected"]),
        "first-detected",
        &name,
        diagnostics,
    );
    let last_detected = coerce_timestamp(
        field(object, &["last_detected", "lastDetected", "LastDetected"]),
        "last-detected",
        &name,
        diagnostics,
    );

    Some(TechnologySignal {
        name,
        category,
        first_detected,
        last_detected,
    })
}

/// Parse every usable entry of the feed, in order
pub fn parse_signals(values: &[Value]) -> Assessed<Vec<TechnologySignal>> {
    let mut diagnostics = Vec::new();
    let signals = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| parse_one(index, value, &mut diagnostics))
        .collect();
    Assessed::with_diagnostics(signals, diagnostics)
}
