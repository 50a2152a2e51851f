//! Ruta administrativa de subida de imágenes

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use crate::controllers::upload_controller::{UploadController, MAX_UPLOAD_BYTES};
use crate::dto::common::UploadResponse;
use crate::middleware::auth::AuthenticatedAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_upload_router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_image))
        // margen para las cabeceras multipart por encima del fichero
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
}

async fn upload_image(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let controller = UploadController::new(&state);
    let response = controller.upload_image(&admin, multipart).await?;
    Ok(Json(response))
}
