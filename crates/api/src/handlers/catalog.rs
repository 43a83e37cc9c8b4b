//! Handlers for the vehicle catalog (filter option lists).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tarifa_db::models::vehicle::FilterOptions;
use tarifa_db::repositories::VehicleRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/options
///
/// Derive the fourteen filter option lists from a single dataset read.
/// Always reflects the table at read time; nothing is cached across
/// requests.
pub async fn list_filter_options(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = VehicleRepo::list_all(&state.pool).await?;
    let options = FilterOptions::from_records(&records);

    tracing::debug!(rows = records.len(), "Computed filter options");

    Ok(Json(DataResponse { data: options }))
}
