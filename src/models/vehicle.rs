//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle (forma pública) y el enum
//! VehicleType con su mapeo a los códigos del almacén (`PARTY_BUS`, ...).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categoría del vehículo - en la API pública viaja como etiqueta
/// legible ("Party Bus"), en el almacén como código (`PARTY_BUS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Party Bus")]
    PartyBus,
    #[serde(rename = "Sprinter Limo")]
    SprinterLimo,
    #[serde(rename = "Stretch Limo")]
    StretchLimo,
    #[serde(rename = "SUV")]
    Suv,
}

impl VehicleType {
    /// Código con el que se persiste en el almacén
    pub fn code(&self) -> &'static str {
        match self {
            VehicleType::PartyBus => "PARTY_BUS",
            VehicleType::SprinterLimo => "SPRINTER_LIMO",
            VehicleType::StretchLimo => "STRETCH_LIMO",
            VehicleType::Suv => "SUV",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PARTY_BUS" => Some(VehicleType::PartyBus),
            "SPRINTER_LIMO" => Some(VehicleType::SprinterLimo),
            "STRETCH_LIMO" => Some(VehicleType::StretchLimo),
            "SUV" => Some(VehicleType::Suv),
            _ => None,
        }
    }

    /// Etiqueta pública ("Party Bus")
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::PartyBus => "Party Bus",
            VehicleType::SprinterLimo => "Sprinter Limo",
            VehicleType::StretchLimo => "Stretch Limo",
            VehicleType::Suv => "SUV",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Party Bus" => Some(VehicleType::PartyBus),
            "Sprinter Limo" => Some(VehicleType::SprinterLimo),
            "Stretch Limo" => Some(VehicleType::StretchLimo),
            "SUV" => Some(VehicleType::Suv),
            _ => None,
        }
    }
}

/// Vehicle - forma pública de un activo rentable del catálogo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: i32,
    pub hourly_rate: Decimal,
    pub min_hours: i32,
    pub description: String,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub gallery_urls: Vec<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_code_round_trip() {
        for t in [
            VehicleType::PartyBus,
            VehicleType::SprinterLimo,
            VehicleType::StretchLimo,
            VehicleType::Suv,
        ] {
            assert_eq!(VehicleType::from_code(t.code()), Some(t));
            assert_eq!(VehicleType::from_label(t.label()), Some(t));
        }
    }

    #[test]
    fn test_vehicle_type_unknown_code() {
        assert_eq!(VehicleType::from_code("HELICOPTER"), None);
        assert_eq!(VehicleType::from_label("Helicopter"), None);
    }

    #[test]
    fn test_vehicle_type_serializes_as_public_label() {
        let json = serde_json::to_string(&VehicleType::PartyBus).unwrap();
        assert_eq!(json, "\"Party Bus\"");

        let parsed: VehicleType = serde_json::from_str("\"SUV\"").unwrap();
        assert_eq!(parsed, VehicleType::Suv);
    }
}
