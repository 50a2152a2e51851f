//! Controller de Testimonials
//!
//! Testimonios del sitio: lectura pública con filtro de destacados y
//! CRUD administrativo.

use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::models::testimonial::Testimonial;
use crate::repositories::testimonial_repository::TestimonialRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct TestimonialController {
    testimonials: TestimonialRepository,
}

impl TestimonialController {
    pub fn new(state: &AppState) -> Self {
        Self {
            testimonials: TestimonialRepository::new(state.pool.clone()),
        }
    }

    /// Lectura pública; `featured` filtra los destacados de la home
    pub async fn list_public(&self, featured: Option<bool>) -> Vec<Testimonial> {
        self.testimonials.list_active(featured).await
    }

    pub async fn list_all(
        &self,
        admin: &AuthenticatedAdmin,
    ) -> Result<Vec<Testimonial>, AppError> {
        require_admin(admin)?;
        self.testimonials.list_all().await
    }

    pub async fn create(
        &self,
        admin: &AuthenticatedAdmin,
        request: CreateTestimonialRequest,
    ) -> Result<ApiResponse<Testimonial>, AppError> {
        require_admin(admin)?;
        request.validate()?;

        let testimonial = self.testimonials.create(&request).await?;
        Ok(ApiResponse::success_with_message(
            testimonial,
            "Testimonial created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
        request: UpdateTestimonialRequest,
    ) -> Result<ApiResponse<Testimonial>, AppError> {
        require_admin(admin)?;
        request.validate()?;

        let testimonial = self.testimonials.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(
            testimonial,
            "Testimonial updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, admin: &AuthenticatedAdmin, id: Uuid) -> Result<(), AppError> {
        require_admin(admin)?;
        self.testimonials.delete(id).await
    }
}
