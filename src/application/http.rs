//! JSON calculator API
//!
//! Thin axum surface over the calculation engine. Handlers read bounds from
//! the shared settings provider, call the engine, and round results to whole
//! currency units on the way out.

use crate::application::error_response::{ApiError, ScenarioJson};
use crate::domain::bounds::CalculatorSettings;
use crate::domain::calculator::{
    compute_affordability, compute_amortization_schedule, compute_payment_breakdown,
    AffordabilityResult, AmortizationYear, PaymentBreakdown,
};
use crate::domain::currency::format_whole_currency;
use crate::domain::scenario::{AffordabilityScenario, LoanScenario};
use crate::infrastructure::log_messages::api;
use crate::infrastructure::SettingsProvider;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{debug, instrument};

/// Largest accepted request body; calculator scenarios are a few hundred bytes
pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;

/// Well-known paths
pub mod paths {
    /// Health check endpoint path
    pub const HEALTH: &str = "/health";

    pub const SETTINGS: &str = "/api/v1/calculators/settings";
    pub const PAYMENT: &str = "/api/v1/calculators/payment";
    pub const AFFORDABILITY: &str = "/api/v1/calculators/affordability";
    pub const AMORTIZATION: &str = "/api/v1/calculators/amortization";
}

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    settings: Arc<dyn SettingsProvider>,
}

/// Build the calculator router over `settings`
pub fn router(settings: Arc<dyn SettingsProvider>) -> Router {
    let router = Router::new()
        .route(paths::HEALTH, get(health_handler))
        .route(paths::SETTINGS, get(settings_handler))
        .route(paths::PAYMENT, post(payment_handler))
        .route(paths::AFFORDABILITY, post(affordability_handler))
        .route(paths::AMORTIZATION, post(amortization_handler))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(ApiState { settings });
    debug!("{}", api::ROUTES_CONFIGURED);
    router
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn settings_handler(State(state): State<ApiState>) -> Json<CalculatorSettings> {
    Json(state.settings.calculator_settings().clone())
}

/// Payment breakdown in whole currency units with a display string
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(flatten)]
    pub breakdown: PaymentBreakdown,
    pub formatted_total_monthly_payment: String,
}

#[instrument(skip_all)]
async fn payment_handler(
    State(state): State<ApiState>,
    ScenarioJson(scenario): ScenarioJson<LoanScenario>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let breakdown = compute_payment_breakdown(&scenario, state.settings.bounds())?;
    Ok(Json(PaymentResponse {
        formatted_total_monthly_payment: format_whole_currency(breakdown.total_monthly_payment),
        breakdown: breakdown.rounded(),
    }))
}

/// Affordability result in whole currency units with a display string
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityResponse {
    #[serde(flatten)]
    pub result: AffordabilityResult,
    pub formatted_max_home_price: String,
}

#[instrument(skip_all)]
async fn affordability_handler(
    State(state): State<ApiState>,
    ScenarioJson(scenario): ScenarioJson<AffordabilityScenario>,
) -> Result<Json<AffordabilityResponse>, ApiError> {
    let result = compute_affordability(&scenario, state.settings.bounds())?;
    Ok(Json(AffordabilityResponse {
        formatted_max_home_price: format_whole_currency(result.max_home_price),
        result: result.rounded(),
    }))
}

#[instrument(skip_all)]
async fn amortization_handler(
    State(state): State<ApiState>,
    ScenarioJson(scenario): ScenarioJson<LoanScenario>,
) -> Result<Json<Vec<AmortizationYear>>, ApiError> {
    let schedule = compute_amortization_schedule(&scenario, state.settings.bounds())?;
    Ok(Json(schedule.iter().map(AmortizationYear::rounded).collect()))
}
