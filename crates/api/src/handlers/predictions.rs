//! Handler for prediction submissions.

use axum::extract::{Form, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tarifa_db::models::vehicle::FilterOptions;
use tarifa_db::repositories::VehicleRepo;
use tarifa_predictor::{Prediction, VehicleFeatures};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the form page needs after a submission: fresh option lists
/// and the prediction (or its inline error string).
#[derive(Debug, Serialize)]
pub struct PredictionPage {
    pub options: FilterOptions,
    pub prediction: Prediction,
}

/// POST /api/v1/predictions
///
/// Accepts the fourteen form fields as url-encoded strings, forwards them
/// to the remote model, and returns the outcome together with
/// freshly recomputed filter options. A failed prediction still answers
/// 200: the error string takes the prediction's place and the options
/// remain fully usable.
pub async fn submit_prediction(
    State(state): State<AppState>,
    Form(features): Form<VehicleFeatures>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        marca = %features.marca,
        modelo = %features.modelo,
        version = %features.version,
        "Prediction requested",
    );

    let prediction = state.predictor.predict(features).await;

    // Re-read the dataset after the remote call so the re-rendered form
    // reflects the table at response time.
    let records = VehicleRepo::list_all(&state.pool).await?;
    let options = FilterOptions::from_records(&records);

    Ok(Json(DataResponse {
        data: PredictionPage {
            options,
            prediction,
        },
    }))
}
