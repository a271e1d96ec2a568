//! Lenient deserializers.
//!
//! Statistics APIs are inconsistent about numeric types: the same field can
//! arrive as `12`, `12.5`, `"12"` or `null` depending on endpoint and year.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flex {
    Num(f64),
    Text(String),
    Null(()),
}

/// Parse a stat value that may be a number or a numeric string.
///
/// Strings like `"32:15"` (time of possession) parse as minutes plus seconds
/// over sixty; anything else unparseable becomes `0.0`.
pub fn parse_stat_value(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<f64>() {
        return v;
    }
    if let Some((mins, secs)) = raw.split_once(':') {
        if let (Ok(m), Ok(s)) = (mins.parse::<f64>(), secs.parse::<f64>()) {
            return m + s / 60.0;
        }
    }
    0.0
}

/// Number or numeric string into `f64`; `null` becomes `0.0`.
pub fn de_flex_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flex::deserialize(deserializer)? {
        Flex::Num(n) => n,
        Flex::Text(s) => parse_stat_value(&s),
        Flex::Null(()) => 0.0,
    })
}

/// Number or numeric string into `Option<u32>`; `null` and garbage become `None`.
pub fn de_opt_flex_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flex>::deserialize(deserializer)? {
        Some(Flex::Num(n)) if n >= 0.0 => Some(n as u32),
        Some(Flex::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// `null` into an empty string.
pub fn de_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
