use std::sync::Arc;

use tarifa_predictor::PredictorClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tarifa_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the remote prediction endpoint.
    pub predictor: Arc<PredictorClient>,
}
