//! Mock order fixture generation.
//!
//! Every generator is a pure function of the supplied random source, so
//! tests can pass a seeded `StdRng` while production callers use
//! `thread_rng` via [`crate::engine::scenario::ScenarioKey::generate`].

use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::models::order::{Delivery, Order, Vehicle};

/// Autonomous delivery providers with known vehicle metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvProvider {
    Serve,
    Nuro,
    Waymo,
    Coco,
    Avride,
}

pub struct AvConfig {
    pub make: &'static str,
    pub model: &'static str,
    pub color: &'static str,
    pub handoff_instructions: &'static str,
}

impl AvProvider {
    pub fn config(self) -> AvConfig {
        match self {
            AvProvider::Serve => AvConfig {
                make: "Serve Robotics",
                model: "Rover",
                color: "Yellow",
                handoff_instructions:
                    "Enter code on keypad. Lift lid. Place food inside. Close lid.",
            },
            AvProvider::Nuro => AvConfig {
                make: "Nuro",
                model: "R2",
                color: "White",
                handoff_instructions:
                    "Enter code on touchscreen. Door will open automatically. Place food in compartment.",
            },
            AvProvider::Waymo => AvConfig {
                make: "Waymo",
                model: "Delivery Bot",
                color: "Blue",
                handoff_instructions:
                    "Scan QR code with phone or enter code. Place food in compartment when lid opens.",
            },
            AvProvider::Coco => AvConfig {
                make: "Coco Robotics",
                model: "Coco Bot",
                color: "Orange",
                handoff_instructions:
                    "Enter passcode on keypad. Place order in top compartment. Close lid securely.",
            },
            AvProvider::Avride => AvConfig {
                make: "AvRide",
                model: "Delivery Robot",
                color: "Green",
                handoff_instructions:
                    "Enter code to unlock. Place food in insulated compartment. Lid will close automatically.",
            },
        }
    }
}

/// Standard human courier order, no AV fields on the vehicle at all.
pub fn standard_order<R: Rng + ?Sized>(rng: &mut R) -> Order {
    Order {
        id: order_id(rng),
        display_id: display_id(rng),
        current_state: "ACCEPTED".to_string(),
        deliveries: vec![Delivery {
            id: delivery_id(rng),
            current_state: "EN_ROUTE_TO_PICKUP".to_string(),
            first_name: "John".to_string(),
            vehicle: Vehicle {
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                color: "Silver".to_string(),
                license_plate: Some("UBER123".to_string()),
                is_autonomous: false,
                passcode: None,
                handoff_instructions: None,
            },
            estimated_pickup_time: future_timestamp(15),
        }],
    }
}

/// Autonomous vehicle order with a fresh 4-digit passcode and the
/// provider's fixed handoff instructions.
pub fn av_order<R: Rng + ?Sized>(rng: &mut R, provider: AvProvider) -> Order {
    let config = provider.config();

    Order {
        id: order_id(rng),
        display_id: display_id(rng),
        current_state: "ACCEPTED".to_string(),
        deliveries: vec![Delivery {
            id: delivery_id(rng),
            current_state: "ARRIVED_AT_PICKUP".to_string(),
            first_name: "Autonomous Vehicle".to_string(),
            vehicle: Vehicle {
                make: config.make.to_string(),
                model: config.model.to_string(),
                color: config.color.to_string(),
                license_plate: None,
                is_autonomous: true,
                passcode: Some(passcode(rng)),
                handoff_instructions: Some(config.handoff_instructions.to_string()),
            },
            estimated_pickup_time: future_timestamp(5),
        }],
    }
}

/// AV order where the provider failed to supply a passcode. The key is
/// dropped from the payload, not serialized as null.
pub fn av_order_missing_passcode<R: Rng + ?Sized>(rng: &mut R) -> Order {
    let mut order = av_order(rng, AvProvider::Serve);
    order.deliveries[0].vehicle.passcode = None;
    order
}

/// AV order without handoff instructions.
pub fn av_order_null_instructions<R: Rng + ?Sized>(rng: &mut R) -> Order {
    let mut order = av_order(rng, AvProvider::Serve);
    order.deliveries[0].vehicle.handoff_instructions = None;
    order
}

/// Order with two legs: a human courier followed by an AV.
pub fn mixed_delivery_order<R: Rng + ?Sized>(rng: &mut R) -> Order {
    let mut deliveries = standard_order(rng).deliveries;
    deliveries.extend(av_order(rng, AvProvider::Serve).deliveries);

    Order {
        id: order_id(rng),
        display_id: display_id(rng),
        current_state: "ACCEPTED".to_string(),
        deliveries,
    }
}

/// Order in CREATED state before any vehicle has been assigned.
pub fn order_before_av_assignment<R: Rng + ?Sized>(rng: &mut R) -> Order {
    Order {
        id: order_id(rng),
        display_id: display_id(rng),
        current_state: "CREATED".to_string(),
        deliveries: vec![Delivery {
            id: delivery_id(rng),
            current_state: "CREATED".to_string(),
            first_name: "Autonomous Vehicle".to_string(),
            vehicle: Vehicle {
                make: "Unknown".to_string(),
                model: "Unknown".to_string(),
                color: "Unknown".to_string(),
                license_plate: None,
                is_autonomous: false,
                passcode: None,
                handoff_instructions: None,
            },
            estimated_pickup_time: future_timestamp(10),
        }],
    }
}

fn order_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes[..]);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn display_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(10_000..100_000u32).to_string()
}

fn delivery_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("delivery_{suffix}")
}

fn passcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(1_000..10_000u32).to_string()
}

fn future_timestamp(minutes_from_now: i64) -> String {
    (Utc::now() + Duration::minutes(minutes_from_now))
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
