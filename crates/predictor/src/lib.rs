//! Client for the remote purchase-price prediction endpoint.
//!
//! Turns submitted form values into the endpoint's `input_data` payload,
//! performs the HTTP call, and interprets the heterogeneous response shapes
//! the endpoint is known to produce. Every failure along the way degrades
//! to a displayable error string; nothing here aborts the user's request.

pub mod client;
pub mod input;
pub mod response;

pub use client::{Prediction, PredictorClient};
pub use input::VehicleFeatures;
pub use response::extract_prediction;

/// Errors from the prediction endpoint client.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("prediction endpoint error ({status}): {body}")]
    Endpoint {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match any of the known shapes.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}
