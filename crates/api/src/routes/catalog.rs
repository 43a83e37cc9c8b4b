//! Route definitions for the vehicle catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes mounted at `/catalog`.
///
/// ```text
/// GET /options -> list_filter_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/options", get(catalog::list_filter_options))
}
