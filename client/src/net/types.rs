//! Wire types for the catalog search endpoint.
//!
//! DESIGN
//! ======
//! Only the three fields the UI renders are read from each doc. Field-level
//! decoding is lenient: a missing or oddly-typed `title`, `author_name` or
//! `cover_i` degrades to its fallback instead of failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level body returned by `search.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    /// Matching catalog entries. `None` when the field is absent or `null`.
    #[serde(default)]
    pub docs: Option<Vec<BookRecord>>,
}

/// Read-only projection of one catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Title as returned by the catalog.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub title: String,
    /// Author names in catalog order; empty when unknown.
    #[serde(rename = "author_name", default, deserialize_with = "deserialize_lenient_strings")]
    pub authors: Vec<String>,
    /// Numeric cover identifier on the cover CDN.
    #[serde(rename = "cover_i", default, deserialize_with = "deserialize_lenient_cover_id")]
    pub cover_id: Option<i64>,
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

fn deserialize_lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        serde_json::Value::String(text) => vec![text],
        _ => Vec::new(),
    })
}

/// Accepts integer or integral-float numbers; anything else (including
/// non-positive ids, which the catalog uses as "no cover") becomes `None`.
fn deserialize_lenient_cover_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Ok(None);
    };
    if let Some(int) = number.as_i64() {
        return Ok(Some(int).filter(|id| *id > 0));
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let id = number
        .as_f64()
        .filter(|float| float.is_finite() && float.fract() == 0.0 && *float <= i64::MAX as f64)
        .map(|float| float as i64);
    Ok(id.filter(|id| *id > 0))
}
