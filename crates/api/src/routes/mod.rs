pub mod catalog;
pub mod health;
pub mod predictions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/options     filter option lists for the form (GET)
/// /predictions         submit form values for a prediction (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .merge(predictions::router())
}
