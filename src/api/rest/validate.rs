use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tracing::info;

use crate::engine::suite::run_validation_suite;
use crate::error::AppError;
use crate::models::report::ValidationSuiteResult;
use crate::state::AppState;
use crate::webhook::WebhookClient;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/validate", post(run_validation))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub webhook_url: Option<String>,
}

async fn run_validation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<ValidationSuiteResult>, AppError> {
    let raw = payload
        .webhook_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing webhookUrl in request body".to_string()))?;

    let target = WebhookClient::parse_target(&raw)?;

    info!(target = %target, "running validation suite");
    let suite = run_validation_suite(&state, &target).await;
    info!(score = %suite.score, all_passed = suite.all_passed, "validation suite finished");

    Ok(Json(suite))
}
