//! Rutas administrativas de Bookings

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthenticatedAdmin;
use crate::models::booking::Booking;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings))
        .route("/", post(create_booking))
        .route("/:id/status", put(update_booking_status))
}

async fn list_bookings(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = BookingController::new(&state);
    let bookings = controller.list(&admin).await?;
    Ok(Json(bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.create(&admin, request).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.update_status(&admin, id, request).await?;
    Ok(Json(response))
}
