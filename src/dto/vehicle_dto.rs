//! DTOs de Vehicle

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::VehicleType;

/// Request para crear un vehículo del catálogo.
///
/// El slug se valida aparte (utils::validation::validate_slug) y debe
/// ser único entre los vehículos activos. display_order se asigna al
/// final de la lista.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    #[validate(range(min = 1, max = 100))]
    pub capacity: i32,

    pub hourly_rate: Decimal,

    #[validate(range(min = 1, max = 24))]
    pub min_hours: i32,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    pub image_url: Option<String>,

    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

/// Request para actualizar un vehículo (reemplazo completo de campos,
/// como en el formulario de fleet del back office)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub slug: String,

    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    #[validate(range(min = 1, max = 100))]
    pub capacity: i32,

    pub hourly_rate: Decimal,

    #[validate(range(min = 1, max = 24))]
    pub min_hours: i32,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[serde(default)]
    pub features: Vec<String>,

    pub is_active: bool,

    pub image_url: Option<String>,

    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

/// Request para reordenar la flota en el catálogo público
#[derive(Debug, Deserialize)]
pub struct ReorderVehiclesRequest {
    pub ordered_ids: Vec<Uuid>,
}

fn default_active() -> bool {
    true
}
