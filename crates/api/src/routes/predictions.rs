//! Route definitions for prediction submissions.

use axum::routing::post;
use axum::Router;

use crate::handlers::predictions;
use crate::state::AppState;

/// Prediction routes.
///
/// ```text
/// POST /predictions -> submit_prediction
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/predictions", post(predictions::submit_prediction))
}
