//! Reading raw listing records and normalizing them into leads.
//!
//! The maps feed is loosely typed: ratings and review counts arrive as
//! numbers or strings, coordinates may be an empty object, and review text
//! may be a list of strings or of `{"text": ...}` objects. Every such field
//! is coerced here and anything unusable is dropped with a diagnostic. Only
//! a missing business name, or an entry that is not an object at all,
//! rejects the record.

use crate::core::{Assessed, Coordinates, Error, Lead, Result};
use crate::technology::parse_signals;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use url::Url;

const GOOGLE_MAPS_URL: &str = "https://maps.google.com/maps?cid=";

/// One record as it appears in the input file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(default, alias = "business_name", alias = "name")]
    pub title: Option<Value>,
    #[serde(default)]
    pub website: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub place_id: Option<Value>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default, alias = "review_count")]
    pub reviews: Option<Value>,
    #[serde(default)]
    pub gps_coordinates: Option<Value>,
    #[serde(default, alias = "description")]
    pub snippet: Option<Value>,
    #[serde(default, rename = "type", alias = "category")]
    pub business_category: Option<Value>,
    #[serde(default)]
    pub photos: Option<Value>,
    #[serde(default)]
    pub reviews_data: Option<Value>,
    #[serde(default)]
    pub mobile_score: Option<Value>,
    #[serde(default)]
    pub technologies: Option<Value>,
    #[serde(default, alias = "gym_linkedin_presence")]
    pub linkedin_presence: Option<Value>,
    /// Set when the entry could not be read as a record at all
    #[serde(skip)]
    pub malformed: Option<String>,
}

impl RawListing {
    /// Placeholder for an entry that is not a record; it is rejected when
    /// normalized so the rest of the batch still scores
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self {
            malformed: Some(reason.into()),
            ..Self::default()
        }
    }
}

/// Parse a listing file: a JSON array of records, or a maps search response
/// with a `local_results` array
pub fn parse_listings(contents: &str) -> Result<Vec<RawListing>> {
    let value: Value = serde_json::from_str(contents)?;
    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("local_results") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(Error::Validation(
                    "expected a JSON array of listings or an object with `local_results`"
                        .to_string(),
                ))
            }
        },
        _ => {
            return Err(Error::Validation(
                "expected a JSON array of listings".to_string(),
            ))
        }
    };

    Ok(records.into_iter().map(listing_from_value).collect())
}

fn listing_from_value(record: Value) -> RawListing {
    if !record.is_object() {
        return RawListing::malformed(format!("expected an object, found {}", record));
    }
    serde_json::from_value(record).unwrap_or_else(|e| RawListing::malformed(e.to_string()))
}

pub fn read_listings(path: &Path) -> Result<Vec<RawListing>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::FileSystem {
        message: format!("Cannot read listings: {}", e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_listings(&contents)
}

/// Normalize a URL: trim, default to https, require a host.
/// Trailing slashes are dropped.
pub fn clean_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    if !host.contains('.') {
        return None;
    }
    Some(url.as_str().trim_end_matches('/').to_string())
}

/// Lowercase host without a leading `www.`
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    Some(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn coerce_count(value: &Value) -> Option<u32> {
    coerce_f64(value)
        .filter(|v| *v >= 0.0)
        .map(|v| v.round().min(f64::from(u32::MAX)) as u32)
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Free text: a string, a number, or a list of strings joined with commas
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(parts) => {
            let joined = parts
                .iter()
                .filter_map(coerce_string)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        other => coerce_string(other),
    }
}

fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Coerce a field, noting a diagnostic when a present value was unusable
fn coerce_field<T>(
    value: Option<&Value>,
    field: &str,
    coerce: impl Fn(&Value) -> Option<T>,
    diagnostics: &mut Vec<String>,
) -> Option<T> {
    let value = value.filter(|v| !is_blank(v))?;
    let coerced = coerce(value);
    if coerced.is_none() {
        diagnostics.push(format!("Ignored malformed {}: {}", field, value));
    }
    coerced
}

fn coordinates(value: &Value) -> Option<Coordinates> {
    let latitude = value.get("latitude").and_then(coerce_f64)?;
    let longitude = value.get("longitude").and_then(coerce_f64)?;
    let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
    valid.then_some(Coordinates {
        latitude,
        longitude,
    })
}

fn review_texts(value: &Value, diagnostics: &mut Vec<String>) -> Vec<String> {
    let Value::Array(entries) = value else {
        if !value.is_null() {
            diagnostics.push("Ignored reviews_data: expected a list".to_string());
        }
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(text) => Some(text.clone()),
            Value::Object(object) => object
                .get("text")
                .or_else(|| object.get("snippet"))
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect()
}

fn photo_count(value: &Value) -> Option<u32> {
    match value {
        Value::Array(photos) => Some(photos.len() as u32),
        other => coerce_count(other),
    }
}

fn category(value: &Value) -> Option<String> {
    match value {
        Value::Array(labels) => {
            let joined = labels
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!joined.is_empty()).then_some(joined)
        }
        other => coerce_string(other),
    }
}

/// Turn a raw record into a lead with every identity and signal field set.
/// Coercions and dropped values are returned as diagnostics.
pub fn normalize(raw: &RawListing) -> Result<Assessed<Lead>> {
    if let Some(reason) = &raw.malformed {
        return Err(Error::InvalidListing(reason.clone()));
    }
    let name = raw
        .title
        .as_ref()
        .and_then(coerce_string)
        .ok_or_else(|| Error::InvalidListing("record has no business name".to_string()))?;

    let mut diagnostics = Vec::new();
    let mut lead = Lead::new(name);

    lead.address = coerce_field(raw.address.as_ref(), "address", coerce_text, &mut diagnostics);
    lead.phone = raw.phone.as_ref().and_then(coerce_string);
    lead.place_id = raw.place_id.as_ref().and_then(coerce_string);
    lead.google_url = lead
        .place_id
        .as_ref()
        .map(|id| format!("{}{}", GOOGLE_MAPS_URL, id));
    lead.description =
        coerce_field(raw.snippet.as_ref(), "description", coerce_text, &mut diagnostics);
    lead.category = raw.business_category.as_ref().and_then(category);

    lead.rating = coerce_field(raw.rating.as_ref(), "rating", coerce_f64, &mut diagnostics)
        .and_then(|rating| {
            if (0.0..=5.0).contains(&rating) {
                Some(rating)
            } else {
                diagnostics.push(format!("Ignored out-of-range rating {}", rating));
                None
            }
        });
    lead.review_count =
        coerce_field(raw.reviews.as_ref(), "review count", coerce_count, &mut diagnostics)
            .unwrap_or(0);

    if let Some(gps) = raw.gps_coordinates.as_ref().filter(|v| !v.is_null()) {
        lead.coordinates = coordinates(gps);
        let empty = gps.as_object().is_some_and(|o| o.is_empty());
        if lead.coordinates.is_none() && !empty {
            diagnostics.push("Ignored malformed GPS coordinates".to_string());
        }
    }

    let website = coerce_field(raw.website.as_ref(), "website", coerce_string, &mut diagnostics);
    if let Some(website) = website {
        match clean_url(&website) {
            Some(url) => {
                lead.domain = extract_domain(&url);
                lead.website = Some(url);
            }
            None => diagnostics.push(format!("Ignored invalid website URL: {}", website)),
        }
    }

    lead.mobile_score = coerce_field(
        raw.mobile_score.as_ref(),
        "mobile score",
        coerce_f64,
        &mut diagnostics,
    )
    .and_then(|score| {
        if (0.0..=100.0).contains(&score) {
            Some(score)
        } else {
            diagnostics.push(format!("Ignored out-of-range mobile score {}", score));
            None
        }
    });

    match raw.technologies.as_ref() {
        Some(Value::Array(entries)) => {
            let (signals, notes) = parse_signals(entries).into_parts();
            lead.technologies = signals;
            diagnostics.extend(notes);
        }
        Some(Value::Null) | None => {}
        Some(_) => diagnostics.push("Ignored technologies: expected a list".to_string()),
    }

    if let Some(reviews) = raw.reviews_data.as_ref() {
        lead.review_texts = review_texts(reviews, &mut diagnostics);
    }
    lead.photo_count =
        coerce_field(raw.photos.as_ref(), "photos", photo_count, &mut diagnostics).unwrap_or(0);
    lead.has_professional_network = raw.linkedin_presence.as_ref().is_some_and(coerce_bool);

    for diagnostic in &diagnostics {
        log::warn!("{}: {}", lead.name, diagnostic);
    }

    Ok(Assessed::with_diagnostics(lead, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_clean_url_adds_scheme_and_strips_slash() {
        assert_eq!(
            clean_url("  www.IronTemple.com/ "),
            Some("https://www.irontemple.com".to_string())
        );
        assert_eq!(
            clean_url("http://gym.example.com/join/"),
            Some("http://gym.example.com/join".to_string())
        );
    }

    #[test]
    fn test_clean_url_rejects_hostless_input() {
        assert_eq!(clean_url(""), None);
        assert_eq!(clean_url("not a url"), None);
        assert_eq!(clean_url("localhost"), None);
        assert_eq!(clean_url("ftp://files.example.com"), None);
    }

    #[test]
    fn test_extract_domain_strips_www() {
        assert_eq!(
            extract_domain("https://www.irontemple.com/schedule"),
            Some("irontemple.com".to_string())
        );
        assert_eq!(
            extract_domain("https://book.zenyoga.studio"),
            Some("book.zenyoga.studio".to_string())
        );
    }

    #[test]
    fn test_missing_title_is_invalid() {
        let err = normalize(&raw(json!({"title": "   ", "rating": 4.5}))).unwrap_err();
        assert!(matches!(err, Error::InvalidListing(_)));
    }

    #[test]
    fn test_lenient_numeric_coercion() {
        let assessed = normalize(&raw(json!({
            "title": "Iron Temple",
            "rating": "4.6",
            "reviews": "1,204",
            "mobile_score": 72,
            "photos": [{"url": "a"}, {"url": "b"}],
        })))
        .unwrap();
        let lead = assessed.value;
        assert_eq!(lead.rating, Some(4.6));
        assert_eq!(lead.review_count, 1204);
        assert_eq!(lead.mobile_score, Some(72.0));
        assert_eq!(lead.photo_count, 2);
        assert!(assessed.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_values_are_dropped_with_diagnostics() {
        let assessed = normalize(&raw(json!({
            "title": "Iron Temple",
            "rating": 7.2,
            "reviews": "lots",
            "mobile_score": "fast",
            "website": "not a url",
            "gps_coordinates": {"latitude": "north"},
        })))
        .unwrap();
        let lead = &assessed.value;
        assert_eq!(lead.rating, None);
        assert_eq!(lead.review_count, 0);
        assert_eq!(lead.mobile_score, None);
        assert_eq!(lead.website, None);
        assert_eq!(lead.coordinates, None);
        assert_eq!(assessed.diagnostics.len(), 5);
    }

    #[test]
    fn test_empty_coordinates_are_not_malformed() {
        let assessed = normalize(&raw(json!({
            "title": "Iron Temple",
            "gps_coordinates": {},
        })))
        .unwrap();
        assert!(assessed.is_clean());
        assert_eq!(assessed.value.coordinates, None);
    }

    #[test]
    fn test_identity_fields() {
        let lead = normalize(&raw(json!({
            "title": "Iron Temple",
            "place_id": "12345",
            "website": "irontemple.com",
            "type": "Gym",
            "gps_coordinates": {"latitude": 36.7378, "longitude": -119.7871},
            "reviews_data": [{"text": "The owner is great"}, "Clean showers", {"rating": 5}],
            "linkedin_presence": true,
        })))
        .unwrap()
        .value;
        assert_eq!(
            lead.google_url.as_deref(),
            Some("https://maps.google.com/maps?cid=12345")
        );
        assert_eq!(lead.domain.as_deref(), Some("irontemple.com"));
        assert_eq!(lead.category.as_deref(), Some("Gym"));
        assert_eq!(lead.review_texts, vec!["The owner is great", "Clean showers"]);
        assert!(lead.has_professional_network);
        assert!(lead.coordinates.is_some());
    }

    #[test]
    fn test_mistyped_text_fields_are_coerced() {
        let assessed = normalize(&raw(json!({
            "title": 24,
            "website": 42,
            "address": ["1 Main St", "Fresno, CA"],
            "snippet": {"text": "Open late"},
        })))
        .unwrap();
        let lead = &assessed.value;
        assert_eq!(lead.name, "24");
        assert_eq!(lead.website, None);
        assert_eq!(lead.address.as_deref(), Some("1 Main St, Fresno, CA"));
        assert_eq!(lead.description, None);
        assert_eq!(
            assessed.diagnostics,
            vec![
                "Ignored malformed description: {\"text\":\"Open late\"}".to_string(),
                "Ignored malformed website: 42".to_string(),
            ]
        );
    }

    #[test]
    fn test_one_bad_record_does_not_fail_the_file() {
        let listings = parse_listings(
            r#"[{"title": "Good Gym", "website": "goodgym.com"},
                {"title": "Odd Gym", "website": 42, "address": ["1 Main St"]},
                null,
                "Loose Gym"]"#,
        )
        .unwrap();
        assert_eq!(listings.len(), 4);

        assert_eq!(normalize(&listings[0]).unwrap().value.name, "Good Gym");
        assert_eq!(normalize(&listings[1]).unwrap().value.name, "Odd Gym");
        for listing in &listings[2..] {
            let err = normalize(listing).unwrap_err();
            assert!(err.to_string().contains("expected an object"), "{}", err);
        }
    }

    #[test]
    fn test_parse_local_results_wrapper() {
        let listings =
            parse_listings(r#"{"local_results": [{"title": "A"}, {"title": "B"}]}"#).unwrap();
        assert_eq!(listings.len(), 2);
        assert!(parse_listings(r#"{"results": []}"#).is_err());
        assert!(parse_listings("42").is_err());
    }
}
