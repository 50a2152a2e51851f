//! Controller de Vehicles
//!
//! Catálogo público de la flota (con fallback a fixtures) y CRUD
//! administrativo con las reglas de slug único y borrado protegido.

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, ReorderVehiclesRequest, UpdateVehicleRequest,
};
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::AppState;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_slug;

pub struct VehicleController {
    vehicles: VehicleRepository,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            vehicles: VehicleRepository::new(state.pool.clone()),
        }
    }

    /// Catálogo público: solo activos, en display_order. Nunca falla
    /// por storage; cae a las fixtures.
    pub async fn list_public(&self) -> Vec<Vehicle> {
        self.vehicles.list_active().await
    }

    /// Detalle público por slug, con el mismo fallback
    pub async fn get_by_slug(&self, slug: &str) -> Result<Vehicle, AppError> {
        self.vehicles
            .find_by_slug(slug)
            .await
            .ok_or_else(|| AppError::NotFound(format!("No vehicle found for slug '{}'", slug)))
    }

    /// Vista admin: toda la flota, activos e inactivos
    pub async fn list_all(&self, admin: &AuthenticatedAdmin) -> Result<Vec<Vehicle>, AppError> {
        require_admin(admin)?;
        self.vehicles.list_all().await
    }

    pub async fn create(
        &self,
        admin: &AuthenticatedAdmin,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        require_admin(admin)?;
        request.validate()?;
        validate_slug(&request.slug)
            .map_err(|_| validation_error("slug", "must be lowercase kebab-case"))?;

        if self.vehicles.slug_taken(&request.slug, None).await? {
            return Err(conflict_error("Vehicle", "slug", &request.slug));
        }

        let vehicle = self.vehicles.create(&request).await?;
        info!("🚐 Vehículo añadido a la flota: {} ({})", vehicle.name, vehicle.slug);

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        require_admin(admin)?;
        request.validate()?;
        validate_slug(&request.slug)
            .map_err(|_| validation_error("slug", "must be lowercase kebab-case"))?;

        if self.vehicles.slug_taken(&request.slug, Some(id)).await? {
            return Err(conflict_error("Vehicle", "slug", &request.slug));
        }

        let vehicle = self.vehicles.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle updated successfully".to_string(),
        ))
    }

    /// Borrado físico, bloqueado mientras existan quotes o bookings que
    /// referencien al vehículo (se desactiva con is_active en su lugar).
    pub async fn delete(&self, admin: &AuthenticatedAdmin, id: Uuid) -> Result<(), AppError> {
        require_admin(admin)?;

        if self.vehicles.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        if self.vehicles.has_references(id).await? {
            return Err(AppError::Conflict(
                "Vehicle is referenced by existing quotes or bookings; deactivate it instead"
                    .to_string(),
            ));
        }

        self.vehicles.delete(id).await?;
        info!("🗑️ Vehículo eliminado de la flota: {}", id);
        Ok(())
    }

    pub async fn reorder(
        &self,
        admin: &AuthenticatedAdmin,
        request: ReorderVehiclesRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        require_admin(admin)?;

        if request.ordered_ids.is_empty() {
            return Err(AppError::BadRequest("ordered_ids cannot be empty".to_string()));
        }

        self.vehicles.reorder(&request.ordered_ids).await?;
        Ok(ApiResponse::success_with_message(
            (),
            "Fleet order updated".to_string(),
        ))
    }

    /// Mapa id -> nombre para que las vistas admin resuelvan referencias
    pub async fn names(
        &self,
        admin: &AuthenticatedAdmin,
    ) -> Result<HashMap<Uuid, String>, AppError> {
        require_admin(admin)?;
        self.vehicles.names_by_id().await
    }
}
