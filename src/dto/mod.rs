//! DTOs de la API
//!
//! Requests y responses que viajan por HTTP, separados de los modelos
//! de dominio. Los requests llevan derives de `validator`.

pub mod booking_dto;
pub mod common;
pub mod contact_dto;
pub mod dashboard_dto;
pub mod quote_dto;
pub mod testimonial_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Deserializer};

/// Deserializador para campos "doble Option": distingue campo ausente
/// (no tocar) de campo presente con null (limpiar el valor).
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
