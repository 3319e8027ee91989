//! Response types returned by the quoting backend.
//!
//! These are deserialized strictly: a response missing a required field is
//! rejected at the boundary instead of being passed through half-formed.
//! Optional backend fields are modelled as `Option` rather than sentinel
//! values.

use serde::{Deserialize, Serialize};

use super::shipment::ShipmentRequest;

/// One segment of a multimodal route. Immutable once received.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransportLeg {
    pub mode: String,
    pub origin: String,
    pub destination: String,
    pub duration: String,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub mode: String,
    pub price: f64,
    pub transit_days: u32,
    /// Legs in transit order.
    pub route: Vec<TransportLeg>,
    #[serde(default)]
    pub carbon_footprint: Option<f64>,
    #[serde(default)]
    pub reliability: Option<f64>,
}

/// Full quoting result. `cheapest`, `fastest` and `best_value` are the
/// backend's own designations and alias entries of `options`; the client
/// renders them as-is without re-ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub cheapest: ShippingOption,
    pub fastest: ShippingOption,
    pub best_value: ShippingOption,
    pub options: Vec<ShippingOption>,
    pub ai_summary: String,
    pub request_id: String,
}

/// Result of posting a shipment to the validation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub normalized: ShipmentRequest,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub shipment_details: ShipmentRequest,
    pub options: Vec<ShippingOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<serde_json::Value>,
}

/// Deeper analysis of already-fetched options. The per-recommendation
/// payloads are backend-defined and kept opaque.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    #[serde(default)]
    pub recommendations: Vec<serde_json::Value>,
    pub analysis: String,
    pub selected_option: ShippingOption,
}
