//! Rutas públicas del sitio
//!
//! Formularios de quote y contacto, catálogo de flota y servicios,
//! testimonios y health check. Sin autenticación; las lecturas de
//! catálogo nunca fallan por storage (fallback a fixtures).

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::controllers::contact_controller::ContactController;
use crate::controllers::quote_controller::QuoteController;
use crate::controllers::testimonial_controller::TestimonialController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::SubmissionResponse;
use crate::dto::contact_dto::ContactMessageRequest;
use crate::dto::quote_dto::SubmitQuoteRequest;
use crate::models::service::ServiceEntry;
use crate::models::testimonial::Testimonial;
use crate::models::vehicle::Vehicle;
use crate::repositories::service_repository::ServiceRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_public_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/quotes", post(submit_quote))
        .route("/api/contact", post(submit_contact))
        .route("/api/fleet", get(list_fleet))
        .route("/api/fleet/:slug", get(get_vehicle_by_slug))
        .route("/api/services", get(list_services))
        .route("/api/services/:slug", get(get_service_by_slug))
        .route("/api/testimonials", get(list_testimonials))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "limo-reservations",
    }))
}

async fn submit_quote(
    State(state): State<AppState>,
    Json(request): Json<SubmitQuoteRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.submit(request).await?;
    Ok(Json(response))
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactMessageRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let controller = ContactController::new(&state);
    let response = controller.submit(request).await?;
    Ok(Json(response))
}

async fn list_fleet(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    let controller = VehicleController::new(&state);
    Json(controller.list_public().await)
}

async fn get_vehicle_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(&state);
    let vehicle = controller.get_by_slug(&slug).await?;
    Ok(Json(vehicle))
}

async fn list_services(State(state): State<AppState>) -> Json<Vec<ServiceEntry>> {
    let repository = ServiceRepository::new(state.pool.clone());
    Json(repository.list_active().await)
}

async fn get_service_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceEntry>, AppError> {
    let repository = ServiceRepository::new(state.pool.clone());
    let service = repository
        .find_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No service found for slug '{}'", slug)))?;
    Ok(Json(service))
}

#[derive(Debug, Deserialize)]
struct TestimonialsQuery {
    featured: Option<bool>,
}

async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<TestimonialsQuery>,
) -> Json<Vec<Testimonial>> {
    let controller = TestimonialController::new(&state);
    Json(controller.list_public(query.featured).await)
}
