use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::fixtures::{
    av_order, av_order_missing_passcode, av_order_null_instructions, mixed_delivery_order,
    order_before_av_assignment, standard_order, AvProvider,
};
use crate::models::order::Order;

/// The named test scenarios, in the fixed order the suite runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKey {
    Standard,
    AvServe,
    AvNuro,
    AvMissingPasscode,
    AvNullInstructions,
    MixedDelivery,
    BeforeAssignment,
}

impl ScenarioKey {
    pub const ALL: [ScenarioKey; 7] = [
        ScenarioKey::Standard,
        ScenarioKey::AvServe,
        ScenarioKey::AvNuro,
        ScenarioKey::AvMissingPasscode,
        ScenarioKey::AvNullInstructions,
        ScenarioKey::MixedDelivery,
        ScenarioKey::BeforeAssignment,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "standard" => Some(ScenarioKey::Standard),
            "av_serve" => Some(ScenarioKey::AvServe),
            "av_nuro" => Some(ScenarioKey::AvNuro),
            "av_missing_passcode" => Some(ScenarioKey::AvMissingPasscode),
            "av_null_instructions" => Some(ScenarioKey::AvNullInstructions),
            "mixed_delivery" => Some(ScenarioKey::MixedDelivery),
            "before_assignment" => Some(ScenarioKey::BeforeAssignment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKey::Standard => "standard",
            ScenarioKey::AvServe => "av_serve",
            ScenarioKey::AvNuro => "av_nuro",
            ScenarioKey::AvMissingPasscode => "av_missing_passcode",
            ScenarioKey::AvNullInstructions => "av_null_instructions",
            ScenarioKey::MixedDelivery => "mixed_delivery",
            ScenarioKey::BeforeAssignment => "before_assignment",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKey::Standard => "Standard Courier Order",
            ScenarioKey::AvServe => "AV Order (Serve Robotics)",
            ScenarioKey::AvNuro => "AV Order (Nuro)",
            ScenarioKey::AvMissingPasscode => "AV Order - Missing Passcode (Error)",
            ScenarioKey::AvNullInstructions => "AV Order - Null Instructions",
            ScenarioKey::MixedDelivery => "Mixed Deliveries",
            ScenarioKey::BeforeAssignment => "Before AV Assignment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKey::Standard => "Regular human courier delivery",
            ScenarioKey::AvServe => "Autonomous delivery with Serve robot",
            ScenarioKey::AvNuro => "Autonomous delivery with Nuro vehicle",
            ScenarioKey::AvMissingPasscode => {
                "AV order without passcode (should trigger error handling)"
            }
            ScenarioKey::AvNullInstructions => "AV order with missing handoff instructions",
            ScenarioKey::MixedDelivery => "Order with both human courier and AV",
            ScenarioKey::BeforeAssignment => "Order in CREATED state before robot assigned",
        }
    }

    /// Generate this scenario's fixture from an explicit random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Order {
        match self {
            ScenarioKey::Standard => standard_order(rng),
            ScenarioKey::AvServe => av_order(rng, AvProvider::Serve),
            ScenarioKey::AvNuro => av_order(rng, AvProvider::Nuro),
            ScenarioKey::AvMissingPasscode => av_order_missing_passcode(rng),
            ScenarioKey::AvNullInstructions => av_order_null_instructions(rng),
            ScenarioKey::MixedDelivery => mixed_delivery_order(rng),
            ScenarioKey::BeforeAssignment => order_before_av_assignment(rng),
        }
    }

    /// Generate a fixture with ambient randomness.
    pub fn generate(&self) -> Order {
        self.generate_with(&mut rand::thread_rng())
    }
}
