use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use validator::{ValidationErrors, ValidationErrorsKind};

lazy_static! {
    /// Regex for a leading delivery version segment in a public id
    /// - Valid: "v1/sample", "v1712345678/gaming-shop/sword"
    /// - Invalid: "v/sample", "version1/sample", "sample"
    pub static ref VERSION_SEGMENT_REGEX: Regex = Regex::new(r"^v[0-9]+/").unwrap();

    /// Regex for public ids that are already absolute URLs
    /// - Valid: "https://example.com/a.png", "http://x", "ftp://host/file"
    /// - Invalid: "gaming-shop/https", "https:/missing-slash"
    pub static ref ABSOLUTE_URL_REGEX: Regex = Regex::new(r"^(https?|ftp)://").unwrap();
}

/// JSON truthiness: `null`, `false`, `0` and `""` are absent, everything else is present
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integral floats print without a fraction (`100.0` → `100`), everything else as JSON writes it
pub fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 2f64.powi(53) => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Text form of a present JSON value as forwarded to the store
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Deserialize a loosely typed request field into text
///
/// Absent and falsy values (`null`, `false`, `0`, `""`) become `None`;
/// any other value is kept in its text form. Pair with `#[serde(default)]`.
pub fn deserialize_present_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(is_present).map(|v| value_text(&v)))
}

/// First human-readable message out of a set of validation errors
pub fn first_message(errors: &ValidationErrors) -> String {
    errors
        .errors()
        .values()
        .find_map(|kind| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string())),
            _ => None,
        })
        .unwrap_or_else(|| errors.to_string())
}
