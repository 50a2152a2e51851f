//! Rutas administrativas de la flota

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, ReorderVehiclesRequest, UpdateVehicleRequest,
};
use crate::middleware::auth::AuthenticatedAdmin;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/names", get(vehicle_names))
        .route("/reorder", put(reorder_vehicles))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(&state);
    let vehicles = controller.list_all(&admin).await?;
    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.create(&admin, request).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.update(&admin, id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(&state);
    controller.delete(&admin, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehicle deleted successfully"
    })))
}

async fn reorder_vehicles(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
    Json(request): Json<ReorderVehiclesRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.reorder(&admin, request).await?;
    Ok(Json(response))
}

async fn vehicle_names(
    State(state): State<AppState>,
    admin: AuthenticatedAdmin,
) -> Result<Json<HashMap<Uuid, String>>, AppError> {
    let controller = VehicleController::new(&state);
    let names = controller.names(&admin).await?;
    Ok(Json(names))
}
