//! Interpretation of the prediction endpoint's response body.
//!
//! Deployed model endpoints answer in several shapes: an envelope keyed by
//! `"result"` (scalar or single-element array), a bare array, or a plain
//! object carrying `precio_compra`. The decoder tries each candidate shape
//! in that fixed priority order; the order is load-bearing and must not be
//! rearranged.

use serde::Deserialize;
use serde_json::Value;

use crate::PredictorError;

/// Candidate response shapes, tried in declaration order by the untagged
/// deserializer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictionBody {
    /// `{"result": ...}` envelope; other keys are ignored.
    Enveloped { result: Value },
    /// A bare array, e.g. `[8999]`.
    Sequence(Vec<Value>),
    /// Any other object, e.g. `{"precio_compra": 7000}`.
    Mapping(serde_json::Map<String, Value>),
}

/// Extract the predicted value from a raw response body.
///
/// A bare scalar body, or an empty array where a prediction was expected,
/// is an [`PredictorError::UnexpectedShape`].
pub fn extract_prediction(body: Value) -> Result<Value, PredictorError> {
    let parsed: PredictionBody = serde_json::from_value(body)
        .map_err(|_| PredictorError::UnexpectedShape("body is not an object or array".into()))?;

    match parsed {
        PredictionBody::Enveloped { result } => match result {
            Value::Array(items) => items.into_iter().next().ok_or_else(|| {
                PredictorError::UnexpectedShape("empty result array".into())
            }),
            other => Ok(other),
        },
        PredictionBody::Sequence(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| PredictorError::UnexpectedShape("empty response array".into())),
        PredictionBody::Mapping(map) => match map.get("precio_compra") {
            Some(price) => Ok(price.clone()),
            None => Ok(Value::Object(map)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_envelope_with_array_takes_first_element() {
        let value = extract_prediction(json!({"result": [15234.5]})).unwrap();
        assert_eq!(value, json!(15234.5));
    }

    #[test]
    fn result_envelope_with_scalar_is_used_directly() {
        let value = extract_prediction(json!({"result": 12000})).unwrap();
        assert_eq!(value, json!(12000));
    }

    #[test]
    fn bare_array_takes_first_element() {
        let value = extract_prediction(json!([8999])).unwrap();
        assert_eq!(value, json!(8999));
    }

    #[test]
    fn mapping_with_precio_compra_takes_that_key() {
        let value = extract_prediction(json!({"precio_compra": 7000})).unwrap();
        assert_eq!(value, json!(7000));
    }

    #[test]
    fn mapping_without_precio_compra_is_returned_whole() {
        let value = extract_prediction(json!({"foo": "bar"})).unwrap();
        assert_eq!(value, json!({"foo": "bar"}));
    }

    #[test]
    fn result_key_takes_priority_over_precio_compra() {
        let value =
            extract_prediction(json!({"result": [100], "precio_compra": 200})).unwrap();
        assert_eq!(value, json!(100));
    }

    #[test]
    fn bare_scalar_is_an_unexpected_shape() {
        let err = extract_prediction(json!(42)).unwrap_err();
        assert!(matches!(err, PredictorError::UnexpectedShape(_)));
    }

    #[test]
    fn empty_arrays_are_unexpected_shapes() {
        assert!(matches!(
            extract_prediction(json!({"result": []})),
            Err(PredictorError::UnexpectedShape(_))
        ));
        assert!(matches!(
            extract_prediction(json!([])),
            Err(PredictorError::UnexpectedShape(_))
        ));
    }
}
