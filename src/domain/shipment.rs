use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Shipment type tags offered by the form, matching the labels the
/// quoting backend expects verbatim.
pub const SHIPMENT_TYPES: [&str; 5] = [
    "Ocean (FCL)",
    "Ocean (LCL)",
    "Air Cargo",
    "FTL Trucking",
    "LTL Trucking",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "tons")]
    Tons,
}

impl WeightUnit {
    pub fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Tons => "tons",
        }
    }

    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "tons" => WeightUnit::Tons,
            _ => WeightUnit::Kg,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    Exw,
    Fob,
    /// Default in the form, as the most common quoting basis.
    #[default]
    Cif,
    Ddp,
}

impl Incoterm {
    pub const ALL: [Incoterm; 4] = [Incoterm::Exw, Incoterm::Fob, Incoterm::Cif, Incoterm::Ddp];

    pub fn code(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fob => "FOB",
            Incoterm::Cif => "CIF",
            Incoterm::Ddp => "DDP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW (Ex Works)",
            Incoterm::Fob => "FOB (Free On Board)",
            Incoterm::Cif => "CIF (Cost, Insurance & Freight)",
            Incoterm::Ddp => "DDP (Delivered Duty Paid)",
        }
    }

    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "EXW" => Incoterm::Exw,
            "FOB" => Incoterm::Fob,
            "DDP" => Incoterm::Ddp,
            _ => Incoterm::Cif,
        }
    }
}

/// The shipment record accumulated by the form and posted wholesale to the
/// quoting backend. Field names on the wire are camelCase to match the
/// backend schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRequest {
    pub shipment_types: BTreeSet<String>,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub volume: f64,
    pub commodity: String,
    pub hs_code: String,
    pub hazardous: bool,
    pub temperature_controlled: bool,
    pub origin: String,
    pub destination: String,
    pub departure_window: String,
    pub incoterms: Incoterm,
    pub customs_clearance: bool,
    pub insurance: bool,
    pub last_mile_delivery: bool,
    pub warehousing: bool,
}

impl ShipmentRequest {
    /// Adds the tag if absent, removes it if present.
    pub fn toggle_shipment_type(&mut self, tag: &str) {
        if !self.shipment_types.remove(tag) {
            self.shipment_types.insert(tag.to_string());
        }
    }

    /// Applies a raw widget value to the named field, coercing by field
    /// type: numerics parse to `f64` (invalid input becomes 0), flags
    /// accept "true"/"on", enums fall back to their default, everything
    /// else stores the raw string. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, raw: &str) {
        match name {
            "weight" => self.weight = parse_number(raw),
            "volume" => self.volume = parse_number(raw),
            "weightUnit" => self.weight_unit = WeightUnit::parse(raw),
            "incoterms" => self.incoterms = Incoterm::parse(raw),
            "hazardous" => self.hazardous = parse_flag(raw),
            "temperatureControlled" => self.temperature_controlled = parse_flag(raw),
            "customsClearance" => self.customs_clearance = parse_flag(raw),
            "insurance" => self.insurance = parse_flag(raw),
            "lastMileDelivery" => self.last_mile_delivery = parse_flag(raw),
            "warehousing" => self.warehousing = parse_flag(raw),
            "commodity" => self.commodity = raw.to_string(),
            "hsCode" => self.hs_code = raw.to_string(),
            "origin" => self.origin = raw.to_string(),
            "destination" => self.destination = raw.to_string(),
            "departureWindow" => self.departure_window = raw.to_string(),
            _ => {}
        }
    }

    pub fn has_shipment_type(&self, tag: &str) -> bool {
        self.shipment_types.contains(tag)
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "true" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_a_noop() {
        let mut request = ShipmentRequest::default();
        request.toggle_shipment_type("Air Cargo");
        assert!(request.has_shipment_type("Air Cargo"));
        request.toggle_shipment_type("Air Cargo");
        assert!(!request.has_shipment_type("Air Cargo"));
        assert!(request.shipment_types.is_empty());
    }

    #[test]
    fn toggle_deduplicates_tags() {
        let mut request = ShipmentRequest::default();
        request.toggle_shipment_type("Ocean (FCL)");
        request.toggle_shipment_type("Ocean (LCL)");
        request.toggle_shipment_type("Ocean (FCL)");
        request.toggle_shipment_type("Ocean (FCL)");
        assert_eq!(request.shipment_types.len(), 2);
    }

    #[test]
    fn numeric_fields_coerce_invalid_input_to_zero() {
        let mut request = ShipmentRequest::default();
        request.set_field("weight", "abc");
        assert_eq!(request.weight, 0.0);
        request.set_field("weight", "12.5");
        assert_eq!(request.weight, 12.5);
        request.set_field("volume", "");
        assert_eq!(request.volume, 0.0);
    }

    #[test]
    fn flag_fields_coerce_to_bool() {
        let mut request = ShipmentRequest::default();
        request.set_field("hazardous", "true");
        assert!(request.hazardous);
        request.set_field("hazardous", "false");
        assert!(!request.hazardous);
        request.set_field("insurance", "on");
        assert!(request.insurance);
    }

    #[test]
    fn enum_fields_fall_back_to_default() {
        let mut request = ShipmentRequest::default();
        request.set_field("incoterms", "DDP");
        assert_eq!(request.incoterms, Incoterm::Ddp);
        request.set_field("incoterms", "bogus");
        assert_eq!(request.incoterms, Incoterm::Cif);
        request.set_field("weightUnit", "tons");
        assert_eq!(request.weight_unit, WeightUnit::Tons);
        request.set_field("weightUnit", "stone");
        assert_eq!(request.weight_unit, WeightUnit::Kg);
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut request = ShipmentRequest::default();
        request.set_field("pallets", "4");
        assert_eq!(request, ShipmentRequest::default());
    }

    #[test]
    fn default_request_is_empty() {
        let request = ShipmentRequest::default();
        assert!(request.shipment_types.is_empty());
        assert_eq!(request.weight, 0.0);
        assert_eq!(request.volume, 0.0);
        assert_eq!(request.weight_unit, WeightUnit::Kg);
        assert_eq!(request.incoterms, Incoterm::Cif);
        assert!(request.commodity.is_empty());
        assert!(request.origin.is_empty());
        assert!(!request.hazardous);
        assert!(!request.warehousing);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut request = ShipmentRequest::default();
        request.toggle_shipment_type("Air Cargo");
        request.set_field("hsCode", "850231");
        request.set_field("temperatureControlled", "true");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["hsCode"], "850231");
        assert_eq!(json["temperatureControlled"], true);
        assert_eq!(json["weightUnit"], "kg");
        assert_eq!(json["incoterms"], "CIF");
        assert_eq!(json["shipmentTypes"][0], "Air Cargo");
    }
}
