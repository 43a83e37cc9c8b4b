//! HTTP client for the prediction endpoint.

use serde::Serialize;
use serde_json::Value;

use tarifa_core::features::{FeatureValue, FEATURE_COLUMNS};

use crate::input::VehicleFeatures;
use crate::response::extract_prediction;
use crate::PredictorError;

/// The outcome shown to the user: either the predicted value, or an error
/// string in its place. Never both, never neither.
///
/// Serializes untagged, so the frontend receives either the raw value or
/// the display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Value(Value),
    Error(String),
}

/// HTTP client for a model-serving prediction endpoint.
pub struct PredictorClient {
    client: reqwest::Client,
    endpoint_url: String,
    api_key: Option<String>,
}

impl PredictorClient {
    /// Create a client for the given endpoint.
    ///
    /// * `endpoint_url` - Full scoring URL of the deployed model.
    /// * `api_key` - Optional credential, attached as a bearer token.
    pub fn new(endpoint_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
            api_key,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        endpoint_url: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint_url,
            api_key,
        }
    }

    /// Request a prediction for the submitted features.
    ///
    /// Never errors: transport failures, non-2xx statuses, and unexpected
    /// response shapes all degrade to [`Prediction::Error`] with a
    /// human-readable `"Error: ..."` message, leaving the rest of the
    /// user's request intact.
    pub async fn predict(&self, features: VehicleFeatures) -> Prediction {
        match self.try_predict(features).await {
            Ok(value) => Prediction::Value(value),
            Err(err) => {
                tracing::warn!(error = %err, "Prediction request failed");
                Prediction::Error(format!("Error: {err}"))
            }
        }
    }

    async fn try_predict(&self, features: VehicleFeatures) -> Result<Value, PredictorError> {
        let payload = build_payload(&features.into_row());

        let mut request = self.client.post(&self.endpoint_url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(PredictorError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        extract_prediction(body)
    }
}

/// Wrap a feature row in the endpoint's request schema: the ordered column
/// list, a single row index, and a single-row data matrix.
pub fn build_payload(row: &[FeatureValue; 14]) -> Value {
    serde_json::json!({
        "input_data": {
            "columns": FEATURE_COLUMNS,
            "index": [0],
            "data": [row],
        }
    })
}
