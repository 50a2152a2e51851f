//! Rutas administrativas de Quotes
//!
//! Bandeja de solicitudes, patch del ciclo de vida, quick actions y
//! conversión a Booking. Todas exigen identidad admin.

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::quote_controller::QuoteController;
use crate::dto::common::ApiResponse;
use crate::dto::quote_dto::UpdateQuoteRequest;
use crate::middleware::auth::AuthenticatedAdmin;
use crate::models::booking::Booking;
use crate::models::quote::Quote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotes))
        .route("/:id", get(get_quote))
        .route("/:id", patch(update_quote))
        .route("/:id/convert", post(convert_quote))
        .route("/:id/contacted", post(mark_contacted))
        .route("/:id/send", post(send_quote))
        .route("/:id/cancel", post(cancel_quote))
}

async fn list_quotes(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    let quotes = controller.list(&admin).await?;
    Ok(Json(quotes))
}

async fn get_quote(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<Quote>, AppError> {
    let controller = QuoteController::new(&state);
    let quote = controller.get_by_id(&admin, id).await?;
    Ok(Json(quote))
}

async fn update_quote(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateQuoteRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.update(&admin, id, patch).await?;
    Ok(Json(response))
}

async fn convert_quote(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booking>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.convert_to_booking(&admin, id).await?;
    Ok(Json(response))
}

async fn mark_contacted(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.mark_contacted(&admin, id).await?;
    Ok(Json(response))
}

async fn send_quote(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateQuoteRequest>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.send_quote(&admin, id, patch).await?;
    Ok(Json(response))
}

async fn cancel_quote(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Quote>>, AppError> {
    let controller = QuoteController::new(&state);
    let response = controller.cancel(&admin, id).await?;
    Ok(Json(response))
}
