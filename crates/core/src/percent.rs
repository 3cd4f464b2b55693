//! Percent handling shared by every progress display.
//!
//! The backend reports percentages as JSON numbers, but nothing downstream
//! trusts the range: values are clamped to `[0, 100]` and anything that is not
//! a usable number collapses to zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Clamp a percentage to `[0, 100]`. `NaN` becomes `0.0`.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Clamp and format with one decimal place, e.g. `"42.5%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", clamp_percent(value))
}

/// Interpret an arbitrary JSON value as a percentage.
///
/// Numbers are taken as-is, numeric strings are parsed, everything else is `0.0`.
#[must_use]
pub fn percent_from_json(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(raw) => raw.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Serde adapter for percent fields that must never fail deserialization.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any JSON value.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(percent_from_json(&value))
}
