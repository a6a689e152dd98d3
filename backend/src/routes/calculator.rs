//! Calculator API routes

use crate::error::ApiError;
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use nutricalc_shared::types::{ApiInfo, CalculationRequest, CalculationResult};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/info", get(info))
}

/// POST /api/calculate - Calculate BMR, TDEE, calorie target and macros
async fn calculate(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(req) = payload?;
    let result = CalculatorService::calculate(&req)?;
    Ok(Json(result))
}

/// GET /api/info - API name, version and scientific references
async fn info(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(state.info().clone())
}
