use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;
use crate::models::order::Order;
use crate::state::AppState;
use crate::webhook::WebhookClient;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/send-order", post(send_order))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOrderRequest {
    pub webhook_url: Option<String>,
    pub order: Option<Order>,
}

/// Transport failures are reported in-band with `status: null` so the
/// caller can show the error text; only malformed input gets a 4xx.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOrderResponse {
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    pub body: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

async fn send_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SendOrderRequest>,
) -> Result<Json<SendOrderResponse>, AppError> {
    let (Some(raw), Some(order)) = (payload.webhook_url, payload.order) else {
        return Err(AppError::BadRequest(
            "Missing webhookUrl or order in request body".to_string(),
        ));
    };

    let target = WebhookClient::parse_target(&raw)?;

    match state.webhook.post_order(&target, &order).await {
        Ok(reply) => {
            // Pass non-JSON reply bodies through as plain strings.
            let body = serde_json::from_str::<Value>(&reply.body)
                .unwrap_or(Value::String(reply.body));

            Ok(Json(SendOrderResponse {
                status: Some(reply.status),
                status_text: Some(reply.status_text),
                body,
                error: None,
            }))
        }
        Err(err) => {
            warn!(target = %target, error = %err, "order forwarding failed");

            Ok(Json(SendOrderResponse {
                status: None,
                status_text: None,
                body: Value::Null,
                error: Some(err.to_string()),
            }))
        }
    }
}
