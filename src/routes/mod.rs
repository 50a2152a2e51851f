//! Rutas HTTP
//!
//! Ensambla el router completo: superficie pública del sitio, login y
//! la API administrativa bajo /api/admin (protegida por el guard JWT).

pub mod auth_routes;
pub mod booking_routes;
pub mod dashboard_routes;
pub mod public_routes;
pub mod quote_routes;
pub mod testimonial_routes;
pub mod upload_routes;
pub mod vehicle_routes;

use axum::Router;
use tower_http::services::ServeDir;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .merge(public_routes::create_public_router())
        .nest_service("/uploads", uploads)
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/admin/quotes", quote_routes::create_quote_router())
        .nest("/api/admin/bookings", booking_routes::create_booking_router())
        .nest("/api/admin/fleet", vehicle_routes::create_vehicle_router())
        .nest(
            "/api/admin/testimonials",
            testimonial_routes::create_testimonial_router(),
        )
        .nest(
            "/api/admin/dashboard",
            dashboard_routes::create_dashboard_router(),
        )
        .nest("/api/admin/upload", upload_routes::create_upload_router())
        .layer(cors_middleware())
        .with_state(state)
}
