//! Modelo de ServiceEntry
//!
//! Entrada del catálogo de servicios (bodas, despedidas, traslados...).
//! Solo lectura desde la API; comparte el fallback a fixtures con el
//! resto del catálogo público.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ServiceEntry - forma pública de un servicio del catálogo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    pub icon: String,
    pub keywords: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
