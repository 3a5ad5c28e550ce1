//! Helpers for reading HTML form submissions into typed models.
//!
//! Browsers submit every input of a form, so an untouched text box arrives
//! as an empty string rather than being absent. The form models treat blank
//! and missing fields the same way: both become `None`.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Serde adapter: blank (empty or whitespace-only) and missing fields
/// deserialize to `None`; anything else is trimmed and parsed with `FromStr`.
///
/// Use together with `#[serde(default)]` so a missing key is accepted.
pub fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Split the long-tail textarea into individual keywords.
///
/// Entries are separated by newlines or commas. Blank entries are skipped
/// and repeats are kept only once, in first-seen order.
pub fn parse_long_tails(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in raw.split(['\n', ',']).map(str::trim) {
        if entry.is_empty() || out.iter().any(|seen| seen == entry) {
            continue;
        }
        out.push(entry.to_string());
    }
    out
}
