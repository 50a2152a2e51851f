//! Rutas administrativas de Testimonials

use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::testimonial_controller::TestimonialController;
use crate::dto::common::ApiResponse;
use crate::dto::testimonial_dto::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::middleware::auth::AuthenticatedAdmin;
use crate::models::testimonial::Testimonial;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_testimonial_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_testimonials))
        .route("/", post(create_testimonial))
        .route("/:id", patch(update_testimonial))
        .route("/:id", delete(delete_testimonial))
}

async fn list_testimonials(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let controller = TestimonialController::new(&state);
    let testimonials = controller.list_all(&admin).await?;
    Ok(Json(testimonials))
}

async fn create_testimonial(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<Json<ApiResponse<Testimonial>>, AppError> {
    let controller = TestimonialController::new(&state);
    let response = controller.create(&admin, request).await?;
    Ok(Json(response))
}

async fn update_testimonial(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> Result<Json<ApiResponse<Testimonial>>, AppError> {
    let controller = TestimonialController::new(&state);
    let response = controller.update(&admin, id, request).await?;
    Ok(Json(response))
}

async fn delete_testimonial(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TestimonialController::new(&state);
    controller.delete(&admin, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Testimonial deleted successfully"
    })))
}
