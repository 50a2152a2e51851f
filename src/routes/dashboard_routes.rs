//! Rutas del dashboard administrativo

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardStats;
use crate::middleware::auth::AuthenticatedAdmin;
use crate::models::booking::Booking;
use crate::models::quote::Quote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_stats))
        .route("/recent-quotes", get(recent_quotes))
        .route("/upcoming-bookings", get(upcoming_bookings))
}

async fn dashboard_stats(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<DashboardStats>, AppError> {
    let controller = DashboardController::new(&state);
    let stats = controller.stats(&admin).await?;
    Ok(Json(stats))
}

async fn recent_quotes(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Quote>>, AppError> {
    let controller = DashboardController::new(&state);
    let quotes = controller.recent_quotes(&admin).await?;
    Ok(Json(quotes))
}

async fn upcoming_bookings(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Booking>>, AppError> {
    let controller = DashboardController::new(&state);
    let bookings = controller.upcoming_bookings(&admin).await?;
    Ok(Json(bookings))
}
