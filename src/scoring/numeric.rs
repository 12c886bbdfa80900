// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lenient numeric fields.

use serde::{Deserialize, Deserializer, Serialize};

/// A numeric field that may have been stored as a number, as text, or as
/// something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    /// Booleans, objects, arrays: kept as stored, scored as zero
    Other(serde_json::Value),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

/// Parse a stored numeric value, treating missing, non-numeric and
/// non-finite values as zero.
pub fn parse_or_zero(value: Option<&RawNumber>) -> f64 {
    let parsed = match value {
        Some(RawNumber::Number(n)) => Some(*n),
        Some(RawNumber::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(RawNumber::Other(_)) | None => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// `deserialize_with` helper for a required numeric field.
///
/// Accepts anything; null and unparsable values become 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(parse_or_zero(raw.as_ref()))
}

/// `deserialize_with` helper for an optional numeric field.
///
/// Null stays `None`; any other value is parsed, with failures as 0.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.map(|value| parse_or_zero(Some(&value))))
}
