use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of checking one logical field in an integrator response.
/// `expected` and `actual` are JSON values; an absent or `null` observation
/// is recorded as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResult {
    pub field: String,
    pub expected: Value,
    pub actual: Value,
    pub passed: bool,
    pub message: String,
}

/// One scenario's verdict. `passed` is true iff at least one field was
/// checked, every check passed and no transport error occurred.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub scenario_name: String,
    pub scenario_key: String,
    pub passed: bool,
    pub fields: Vec<FieldResult>,
    pub response_status: Option<u16>,
    pub response_body: Option<Value>,
    pub error: Option<String>,
}

/// Aggregate report over the full scenario suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSuiteResult {
    pub results: Vec<ValidationResult>,
    pub passed: usize,
    pub failed: usize,
    pub total: usize,
    pub score: String,
    pub all_passed: bool,
    pub timestamp: String,
}
