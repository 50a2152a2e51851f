//! Modelo de Testimonial
//!
//! Contenido editorial con rating 1-5 y flags de publicación. CRUD simple
//! que comparte el Authorization Guard y el Persistence Gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Testimonial - forma pública
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub event_type: Option<String>,
    pub rating: i32,
    pub text: String,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
