use serde::{Deserialize, Serialize};

/// Courier vehicle as it appears on the order payload. For autonomous
/// vehicles the `passcode` and `handoff_instructions` fields carry the
/// compartment PIN and the provider's loading steps; both may be absent to
/// model a provider that failed to supply them. Absent fields are omitted
/// from the serialized object entirely, never written as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    pub is_autonomous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoff_instructions: Option<String>,
}

/// One leg of an order. `current_state` is a free-form string on the wire;
/// only CREATED, EN_ROUTE_TO_PICKUP and ARRIVED_AT_PICKUP are produced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: String,
    pub current_state: String,
    pub first_name: String,
    pub vehicle: Vehicle,
    pub estimated_pickup_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub display_id: String,
    pub current_state: String,
    pub deliveries: Vec<Delivery>,
}
