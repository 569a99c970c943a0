//! HTTP handlers for the prediction endpoints.
//!
//! Request and response field names follow the original public API exactly,
//! including the spaced JSON keys.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use mylla_core::inference::Classifier;
use mylla_core::model::{IrrigationReading, Nutrient, NutrientReading};
use mylla_core::rules::schema::RuleSetDef;

use crate::error::{ApiError, ApiResult};

/// Body of the status route.
pub const RUNNING_BANNER: &str = "Smart Irrigation & Fertilization API is running!";

/// State shared across all handlers.
///
/// Models and ruleset are loaded once at startup and never mutated, so
/// handlers read them concurrently without locks.
#[derive(Clone)]
pub struct AppState {
    pub irrigation: Arc<dyn Classifier>,
    pub fertilizer: Arc<dyn Classifier>,
    pub rules: Arc<RuleSetDef>,
    /// When false, fertiliser responses carry only the verdict.
    pub recommendations: bool,
}

#[derive(Debug, Deserialize)]
pub struct IrrigationRequest {
    pub moisture: Decimal,
    pub temperature: Decimal,
    pub humidity: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct FertiliserRequest {
    pub nitrogen: Decimal,
    pub phosphorus: Decimal,
    pub potassium: Decimal,
}

#[derive(Debug, Serialize)]
pub struct IrrigationResponse {
    #[serde(rename = "Irrigation Required")]
    pub irrigation_required: bool,
    #[serde(rename = "Water Suggestion")]
    pub water_suggestion: String,
}

#[derive(Debug, Default, Serialize)]
pub struct FertiliserResponse {
    #[serde(rename = "Fertilizer Required")]
    pub fertilizer_required: bool,
    #[serde(rename = "Nitrogen Status", skip_serializing_if = "Option::is_none")]
    pub nitrogen_status: Option<String>,
    #[serde(rename = "Phosphorus Status", skip_serializing_if = "Option::is_none")]
    pub phosphorus_status: Option<String>,
    #[serde(rename = "Potassium Status", skip_serializing_if = "Option::is_none")]
    pub potassium_status: Option<String>,
    #[serde(
        rename = "Nitrogen Recommendation",
        skip_serializing_if = "Option::is_none"
    )]
    pub nitrogen_recommendation: Option<String>,
    #[serde(
        rename = "Phosphorus Recommendation",
        skip_serializing_if = "Option::is_none"
    )]
    pub phosphorus_recommendation: Option<String>,
    #[serde(
        rename = "Potassium Recommendation",
        skip_serializing_if = "Option::is_none"
    )]
    pub potassium_recommendation: Option<String>,
}

/// GET / - status probe.
pub async fn home() -> &'static str {
    RUNNING_BANNER
}

/// POST /predict_irrigation
pub async fn predict_irrigation(
    State(state): State<AppState>,
    payload: Result<Json<IrrigationRequest>, JsonRejection>,
) -> ApiResult<Json<IrrigationResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let reading = IrrigationReading {
        moisture: req.moisture,
        temperature: req.temperature,
        humidity: req.humidity,
    };
    let advice = mylla_core::advise_irrigation(&reading, state.irrigation.as_ref(), &state.rules)?;

    info!(
        required = advice.irrigation_required,
        band = %advice.water.band,
        "irrigation prediction"
    );

    Ok(Json(IrrigationResponse {
        irrigation_required: advice.irrigation_required,
        water_suggestion: advice.water.suggestion,
    }))
}

/// POST /predict_fertiliser
pub async fn predict_fertiliser(
    State(state): State<AppState>,
    payload: Result<Json<FertiliserRequest>, JsonRejection>,
) -> ApiResult<Json<FertiliserResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let reading = NutrientReading {
        nitrogen: req.nitrogen,
        phosphorus: req.phosphorus,
        potassium: req.potassium,
    };
    let advice = mylla_core::advise_fertilizer(&reading, state.fertilizer.as_ref(), &state.rules)?;

    info!(
        required = advice.fertilizer_required,
        "fertiliser prediction"
    );

    let mut response = FertiliserResponse {
        fertilizer_required: advice.fertilizer_required,
        ..Default::default()
    };

    if state.recommendations {
        for assessment in &advice.assessments {
            let status = Some(assessment.status.to_string());
            let action = Some(assessment.action.clone());
            match assessment.nutrient {
                Nutrient::Nitrogen => {
                    response.nitrogen_status = status;
                    response.nitrogen_recommendation = action;
                }
                Nutrient::Phosphorus => {
                    response.phosphorus_status = status;
                    response.phosphorus_recommendation = action;
                }
                Nutrient::Potassium => {
                    response.potassium_status = status;
                    response.potassium_recommendation = action;
                }
            }
        }
    }

    Ok(Json(response))
}

/// Build the application router. State is attached by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/predict_irrigation", post(predict_irrigation))
        .route("/predict_fertiliser", post(predict_fertiliser))
}
