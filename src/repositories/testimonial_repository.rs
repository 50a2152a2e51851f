//! Repositorio de Testimonial
//!
//! CRUD editorial. Las lecturas públicas comparten el fallback a
//! fixtures; las administrativas y todas las escrituras van directas
//! al almacén.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::fixtures::MOCK_TESTIMONIALS;
use crate::models::testimonial::Testimonial;
use crate::utils::errors::{not_found_error, AppError};

use super::with_fixture_fallback;

/// Fila nativa del almacén para testimonials
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialRow {
    pub id: Uuid,
    pub name: String,
    #[sqlx(rename = "eventType")]
    pub event_type: Option<String>,
    pub rating: i32,
    pub text: String,
    #[sqlx(rename = "isFeatured")]
    pub is_featured: bool,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl TestimonialRow {
    pub fn into_entity(self) -> Testimonial {
        Testimonial {
            id: self.id,
            name: self.name,
            event_type: self.event_type,
            rating: self.rating,
            text: self.text,
            is_featured: self.is_featured,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lectura pública con fallback a fixtures; `featured` filtra los
    /// destacados de la portada
    pub async fn list_active(&self, featured: Option<bool>) -> Vec<Testimonial> {
        let result = match featured {
            Some(true) => {
                sqlx::query_as::<_, TestimonialRow>(
                    r#"SELECT * FROM testimonials
                       WHERE "isActive" = TRUE AND "isFeatured" = TRUE
                       ORDER BY "createdAt" DESC"#,
                )
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                sqlx::query_as::<_, TestimonialRow>(
                    r#"SELECT * FROM testimonials
                       WHERE "isActive" = TRUE
                       ORDER BY "createdAt" DESC"#,
                )
                .fetch_all(&self.pool)
                .await
            }
        };

        with_fixture_fallback(result, TestimonialRow::into_entity, || {
            if featured == Some(true) {
                MOCK_TESTIMONIALS
                    .iter()
                    .filter(|t| t.is_featured)
                    .cloned()
                    .collect()
            } else {
                MOCK_TESTIMONIALS.clone()
            }
        })
    }

    /// Listado administrativo completo, sin fallback
    pub async fn list_all(&self) -> Result<Vec<Testimonial>, AppError> {
        let rows = sqlx::query_as::<_, TestimonialRow>(
            r#"SELECT * FROM testimonials ORDER BY "createdAt" DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TestimonialRow::into_entity).collect())
    }

    pub async fn create(
        &self,
        request: &CreateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let row = sqlx::query_as::<_, TestimonialRow>(
            r#"
            INSERT INTO testimonials
                (id, name, "eventType", rating, text, "isFeatured", "isActive", "createdAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.event_type)
        .bind(request.rating)
        .bind(&request.text)
        .bind(request.is_featured)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    /// Patch parcial con el patrón cargar-fusionar-escribir
    pub async fn update(
        &self,
        id: Uuid,
        patch: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let current = sqlx::query_as::<_, TestimonialRow>(
            "SELECT * FROM testimonials WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Testimonial", &id.to_string()))?;

        let row = sqlx::query_as::<_, TestimonialRow>(
            r#"
            UPDATE testimonials
            SET name = $2, "eventType" = $3, rating = $4, text = $5,
                "isFeatured" = $6, "isActive" = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name.as_ref().unwrap_or(&current.name))
        .bind(match &patch.event_type {
            Some(event_type) => event_type.as_ref(),
            None => current.event_type.as_ref(),
        })
        .bind(patch.rating.unwrap_or(current.rating))
        .bind(patch.text.as_ref().unwrap_or(&current.text))
        .bind(patch.is_featured.unwrap_or(current.is_featured))
        .bind(patch.is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Testimonial", &id.to_string()));
        }
        Ok(())
    }
}
