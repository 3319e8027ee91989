//! Shipment form state and quoting result types.

pub mod app_state;
pub mod quote;
pub mod shipment;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use quote::{
    QuoteResponse, RecommendationReport, RecommendationRequest, ShippingOption, TransportLeg,
    ValidationReport,
};
#[allow(unused_imports)]
pub use shipment::{Incoterm, ShipmentRequest, WeightUnit, SHIPMENT_TYPES};
