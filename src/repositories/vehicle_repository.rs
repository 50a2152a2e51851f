//! Repositorio de Vehicle
//!
//! Traduce entre la forma pública del vehículo y la fila nativa del
//! almacén (columnas camelCase, tipo como código `PARTY_BUS`). Las
//! lecturas públicas hacen fallback al Fixture Store.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::fixtures::MOCK_VEHICLES;
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::{not_found_error, AppError};

use super::with_fixture_fallback;

/// Fila nativa del almacén para vehicles
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub capacity: i32,
    #[sqlx(rename = "hourlyRate")]
    pub hourly_rate: rust_decimal::Decimal,
    #[sqlx(rename = "minHours")]
    pub min_hours: i32,
    pub description: String,
    pub features: Vec<String>,
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[sqlx(rename = "galleryUrls")]
    pub gallery_urls: Vec<String>,
    #[sqlx(rename = "displayOrder")]
    pub display_order: i32,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl VehicleRow {
    /// Forma almacén -> forma pública
    pub fn into_entity(self) -> Vehicle {
        Vehicle {
            id: self.id,
            name: self.name,
            slug: self.slug,
            vehicle_type: VehicleType::from_code(&self.vehicle_type)
                .unwrap_or(VehicleType::PartyBus),
            capacity: self.capacity,
            hourly_rate: self.hourly_rate,
            min_hours: self.min_hours,
            description: self.description,
            features: self.features,
            image_url: self.image_url,
            gallery_urls: self.gallery_urls,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Forma pública -> forma almacén
    pub fn from_entity(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name.clone(),
            slug: vehicle.slug.clone(),
            vehicle_type: vehicle.vehicle_type.code().to_string(),
            capacity: vehicle.capacity,
            hourly_rate: vehicle.hourly_rate,
            min_hours: vehicle.min_hours,
            description: vehicle.description.clone(),
            features: vehicle.features.clone(),
            image_url: vehicle.image_url.clone(),
            gallery_urls: vehicle.gallery_urls.clone(),
            display_order: vehicle.display_order,
            is_active: vehicle.is_active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lectura pública del catálogo con fallback a fixtures
    pub async fn list_active(&self) -> Vec<Vehicle> {
        let result = sqlx::query_as::<_, VehicleRow>(
            r#"SELECT * FROM vehicles WHERE "isActive" = TRUE ORDER BY "displayOrder""#,
        )
        .fetch_all(&self.pool)
        .await;

        with_fixture_fallback(result, VehicleRow::into_entity, || MOCK_VEHICLES.clone())
    }

    /// Búsqueda pública por slug con fallback a fixtures
    pub async fn find_by_slug(&self, slug: &str) -> Option<Vehicle> {
        let result = sqlx::query_as::<_, VehicleRow>(
            r#"SELECT * FROM vehicles WHERE slug = $1 AND "isActive" = TRUE"#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Some(row.into_entity()),
            Ok(None) | Err(_) => MOCK_VEHICLES.iter().find(|v| v.slug == slug).cloned(),
        }
    }

    /// Resuelve un slug a id de vehículo para la captura pública de quotes.
    /// Solo consulta el almacén durable: los ids de fixtures no existen en
    /// la tabla y romperían la FK de quotes al persistir. Cualquier fallo o
    /// slug desconocido se resuelve a None.
    pub async fn resolve_slug(&self, slug: &str) -> Option<Uuid> {
        let result: Result<Option<(Uuid,)>, sqlx::Error> =
            sqlx::query_as(r#"SELECT id FROM vehicles WHERE slug = $1 AND "isActive" = TRUE"#)
                .bind(slug)
                .fetch_optional(&self.pool)
                .await;

        match result {
            Ok(Some((id,))) => Some(id),
            Ok(None) | Err(_) => None,
        }
    }

    /// Listado administrativo completo, sin fallback
    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"SELECT * FROM vehicles ORDER BY "displayOrder""#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VehicleRow::into_entity).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(VehicleRow::into_entity))
    }

    /// Invariante: slug único entre vehículos activos
    pub async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE slug = $1 AND "isActive" = TRUE AND ($2::uuid IS NULL OR id <> $2)
            )"#,
        )
        .bind(slug)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(&self, request: &CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles
                (id, name, slug, "type", capacity, "hourlyRate", "minHours", description,
                 features, "imageUrl", "galleryUrls", "displayOrder", "isActive",
                 "createdAt", "updatedAt")
            VALUES
                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                 (SELECT COALESCE(MAX("displayOrder"), 0) + 1 FROM vehicles),
                 $12, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.slug)
        .bind(request.vehicle_type.code())
        .bind(request.capacity)
        .bind(request.hourly_rate)
        .bind(request.min_hours)
        .bind(&request.description)
        .bind(&request.features)
        .bind(&request.image_url)
        .bind(&request.gallery_urls)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    /// Actualización completa (el formulario de fleet envía todos los campos)
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET name = $2, slug = $3, "type" = $4, capacity = $5, "hourlyRate" = $6,
                "minHours" = $7, description = $8, features = $9, "imageUrl" = $10,
                "galleryUrls" = $11, "isActive" = $12, "updatedAt" = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.slug)
        .bind(request.vehicle_type.code())
        .bind(request.capacity)
        .bind(request.hourly_rate)
        .bind(request.min_hours)
        .bind(&request.description)
        .bind(&request.features)
        .bind(&request.image_url)
        .bind(&request.gallery_urls)
        .bind(request.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(row.into_entity())
    }

    /// Borrado físico. El guard de referencias vive en el controller.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", &id.to_string()));
        }
        Ok(())
    }

    /// Comprueba si alguna quote o booking histórica referencia al vehículo
    pub async fn has_references(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"SELECT EXISTS(SELECT 1 FROM quotes WHERE "preferredVehicleId" = $1)
               OR EXISTS(SELECT 1 FROM bookings WHERE "vehicleId" = $1)"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Reordena la flota según la posición en la lista recibida.
    /// Una sola transacción: el orden se aplica completo o no se aplica.
    pub async fn reorder(&self, ordered_ids: &[Uuid]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for (index, vehicle_id) in ordered_ids.iter().enumerate() {
            sqlx::query(
                r#"UPDATE vehicles SET "displayOrder" = $2, "updatedAt" = NOW() WHERE id = $1"#,
            )
            .bind(vehicle_id)
            .bind(index as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Mapa id -> nombre para resolver referencias en vistas admin
    pub async fn names_by_id(&self) -> Result<HashMap<Uuid, String>, AppError> {
        let rows: Vec<(Uuid, String)> = sqlx::query_as("SELECT id, name FROM vehicles")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ley de ida y vuelta: pública -> almacén -> pública -> almacén es
    /// un punto fijo para todos los campos definidos.
    #[test]
    fn test_mapping_round_trip_is_stable() {
        for fixture in MOCK_VEHICLES.iter() {
            let store = VehicleRow::from_entity(fixture);
            let back = store.clone().into_entity();
            let store_again = VehicleRow::from_entity(&back);

            assert_eq!(store.id, store_again.id);
            assert_eq!(store.name, store_again.name);
            assert_eq!(store.slug, store_again.slug);
            assert_eq!(store.vehicle_type, store_again.vehicle_type);
            assert_eq!(store.capacity, store_again.capacity);
            assert_eq!(store.hourly_rate, store_again.hourly_rate);
            assert_eq!(store.min_hours, store_again.min_hours);
            assert_eq!(store.description, store_again.description);
            assert_eq!(store.features, store_again.features);
            assert_eq!(store.image_url, store_again.image_url);
            assert_eq!(store.gallery_urls, store_again.gallery_urls);
            assert_eq!(store.display_order, store_again.display_order);
            assert_eq!(store.is_active, store_again.is_active);
            assert_eq!(store.created_at, store_again.created_at);
            assert_eq!(store.updated_at, store_again.updated_at);
        }
    }

    #[test]
    fn test_store_codes_are_screaming_snake() {
        let row = VehicleRow::from_entity(&MOCK_VEHICLES[0]);
        assert_eq!(row.vehicle_type, "PARTY_BUS");
    }

    #[test]
    fn test_unknown_store_code_defaults_to_party_bus() {
        let mut row = VehicleRow::from_entity(&MOCK_VEHICLES[0]);
        row.vehicle_type = "HOVERCRAFT".to_string();
        assert_eq!(row.into_entity().vehicle_type, VehicleType::PartyBus);
    }

    fn unreachable_repo() -> VehicleRepository {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://postgres@127.0.0.1:1/unreachable")
            .unwrap();
        VehicleRepository::new(pool)
    }

    /// Con el almacén caído el slug de un fixture conocido debe resolver a
    /// None: un id de fixture no existe en la tabla y violaría la FK de
    /// quotes."preferredVehicleId" al persistir la solicitud.
    #[tokio::test]
    async fn test_resolve_slug_never_yields_fixture_ids() {
        let repo = unreachable_repo();
        assert!(MOCK_VEHICLES.iter().any(|v| v.slug == "the-sovereign"));
        assert_eq!(repo.resolve_slug("the-sovereign").await, None);
        assert_eq!(repo.resolve_slug("no-such-slug").await, None);
    }

    #[tokio::test]
    async fn test_reorder_fails_whole_without_store() {
        let repo = unreachable_repo();
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        assert!(repo.reorder(&ids).await.is_err());
    }
}
