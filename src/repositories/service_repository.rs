//! Repositorio de ServiceEntry
//!
//! Catálogo de servicios, solo lectura. Mismo contrato de fallback que
//! el resto del catálogo público.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::fixtures::MOCK_SERVICES;
use crate::models::service::ServiceEntry;

use super::with_fixture_fallback;

/// Fila nativa del almacén para services
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub tagline: String,
    pub description: String,
    #[sqlx(rename = "longDescription")]
    pub long_description: String,
    pub icon: String,
    pub keywords: String,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[sqlx(rename = "displayOrder")]
    pub display_order: i32,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ServiceRow {
    pub fn into_entity(self) -> ServiceEntry {
        ServiceEntry {
            id: self.id,
            title: self.title,
            slug: self.slug,
            tagline: self.tagline,
            description: self.description,
            long_description: self.long_description,
            icon: self.icon,
            keywords: self.keywords,
            image_url: self.image_url,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lectura pública con fallback a fixtures
    pub async fn list_active(&self) -> Vec<ServiceEntry> {
        let result = sqlx::query_as::<_, ServiceRow>(
            r#"SELECT * FROM services WHERE "isActive" = TRUE ORDER BY "displayOrder""#,
        )
        .fetch_all(&self.pool)
        .await;

        with_fixture_fallback(result, ServiceRow::into_entity, || MOCK_SERVICES.clone())
    }

    /// Búsqueda pública por slug con fallback a fixtures
    pub async fn find_by_slug(&self, slug: &str) -> Option<ServiceEntry> {
        let result = sqlx::query_as::<_, ServiceRow>(
            r#"SELECT * FROM services WHERE slug = $1 AND "isActive" = TRUE"#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Some(row.into_entity()),
            Ok(None) | Err(_) => MOCK_SERVICES.iter().find(|s| s.slug == slug).cloned(),
        }
    }
}
