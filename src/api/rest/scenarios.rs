use std::sync::Arc;

use axum::extract::Path;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Serialize;

use crate::engine::scenario::ScenarioKey;
use crate::error::AppError;
use crate::models::order::Order;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/scenarios/:key/order", post(generate_order))
}

#[derive(Serialize)]
pub struct ScenarioInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

async fn list_scenarios() -> Json<Vec<ScenarioInfo>> {
    let scenarios = ScenarioKey::ALL
        .iter()
        .map(|key| ScenarioInfo {
            key: key.as_str(),
            name: key.name(),
            description: key.description(),
        })
        .collect();

    Json(scenarios)
}

async fn generate_order(Path(key): Path<String>) -> Result<Json<Order>, AppError> {
    let scenario = ScenarioKey::parse(&key)
        .ok_or_else(|| AppError::NotFound(format!("scenario {key} not found")))?;

    Ok(Json(scenario.generate()))
}
