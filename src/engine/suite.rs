//! Suite orchestration: run every scenario against one endpoint.
//!
//! Scenarios run strictly sequentially so report ordering stays
//! deterministic. A transport failure or unparseable body in one scenario
//! is folded into that scenario's result; it never aborts the suite.

use std::time::Instant;

use chrono::{SecondsFormat, Utc};
use reqwest::Url;
use serde_json::Value;
use tracing::{info, warn};

use crate::engine::scenario::ScenarioKey;
use crate::engine::validator::validate_response;
use crate::models::report::{ValidationResult, ValidationSuiteResult};
use crate::state::AppState;

pub const PARSE_ERROR_MESSAGE: &str =
    "Response was not valid JSON. Your endpoint should return a JSON object.";

pub async fn run_validation_suite(state: &AppState, target: &Url) -> ValidationSuiteResult {
    state.metrics.suite_runs_total.inc();

    let mut results: Vec<ValidationResult> = Vec::with_capacity(ScenarioKey::ALL.len());

    for key in ScenarioKey::ALL {
        let result = run_scenario(state, target, key).await;

        let outcome = if result.passed { "pass" } else { "fail" };
        state
            .metrics
            .scenario_validations_total
            .with_label_values(&[outcome])
            .inc();
        info!(
            scenario = key.as_str(),
            passed = result.passed,
            "scenario validated"
        );

        results.push(result);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    ValidationSuiteResult {
        passed,
        failed,
        total: results.len(),
        score: format!("{passed}/{}", results.len()),
        all_passed: failed == 0,
        results,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

async fn run_scenario(state: &AppState, target: &Url, key: ScenarioKey) -> ValidationResult {
    let order = key.generate();
    let start = Instant::now();

    match state.webhook.post_order(target, &order).await {
        Ok(reply) => {
            state
                .metrics
                .webhook_request_seconds
                .with_label_values(&["success"])
                .observe(start.elapsed().as_secs_f64());

            let (body, parse_error) = match serde_json::from_str::<Value>(&reply.body) {
                Ok(value) => (Some(value), None),
                Err(_) => (None, Some(PARSE_ERROR_MESSAGE.to_string())),
            };

            validate_response(key, &order, Some(reply.status), body, parse_error)
        }
        Err(err) => {
            state
                .metrics
                .webhook_request_seconds
                .with_label_values(&["error"])
                .observe(start.elapsed().as_secs_f64());
            warn!(scenario = key.as_str(), error = %err, "webhook call failed");

            validate_response(key, &order, None, None, Some(err.to_string()))
        }
    }
}
