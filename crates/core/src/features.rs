//! Feature schema and numeric coercion for prediction requests.
//!
//! The remote model expects a single row of fourteen values in a fixed
//! column order. String-typed attributes pass through unchanged; numeric
//! attributes are coerced with [`parse_optional_int`], which never fails --
//! unusable input becomes a null feature instead of an error.

use serde::Serialize;

/// Column names of the feature row, in the exact order the remote model
/// expects. The spellings match the upstream model's training schema and
/// must not be normalized.
pub const FEATURE_COLUMNS: [&str; 14] = [
    "marca",
    "modelo",
    "version",
    "startYear",
    "endYear",
    "cilindrada",
    "cv",
    "id_carroceria",
    "pf",
    "puertas",
    "id_combustible",
    "matriculacion",
    "periodoDescripcion",
    "Anno",
];

/// A single cell of the feature row.
///
/// Serializes untagged: `Text` as a JSON string, `Int` as a JSON number,
/// `Null` as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(String),
    Int(i64),
    Null,
}

impl FeatureValue {
    /// Build a text feature from a raw form value.
    pub fn text(raw: impl Into<String>) -> Self {
        FeatureValue::Text(raw.into())
    }

    /// Coerce a raw form value into an integer feature, falling back to
    /// `Null` when the value is empty or not numeric.
    pub fn int_or_null(raw: &str) -> Self {
        match parse_optional_int(raw) {
            Some(value) => FeatureValue::Int(value),
            None => FeatureValue::Null,
        }
    }
}

/// Best-effort integer coercion of a free-text form field.
///
/// Parses the value as a float and truncates toward zero, so decimal-looking
/// input like `"2020.7"` yields `2020`. Empty or whitespace-only input,
/// non-numeric input, NaN, and infinities all yield `None`. This function
/// never errors: coercion failure is an expected outcome, not a fault.
pub fn parse_optional_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}
