//! Repositorio de Quote
//!
//! Acceso al almacén para solicitudes de presupuesto, incluido el
//! Conversion Workflow: la materialización Quote → Booking ocurre aquí
//! dentro de una sola transacción con el row de la Quote bloqueado.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::quote_dto::UpdateQuoteRequest;
use crate::models::booking::{Booking, NewBooking};
use crate::models::quote::{NewQuote, Quote, QuoteStatus};
use crate::repositories::booking_repository::insert_booking;
use crate::utils::errors::{invalid_transition_error, not_found_error, AppError};

/// Fila nativa del almacén para quotes
#[derive(Debug, Clone, FromRow)]
pub struct QuoteRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sqlx(rename = "eventType")]
    pub event_type: String,
    #[sqlx(rename = "preferredVehicleId")]
    pub preferred_vehicle_id: Option<Uuid>,
    #[sqlx(rename = "eventDate")]
    pub event_date: chrono::NaiveDate,
    #[sqlx(rename = "pickupTime")]
    pub pickup_time: Option<String>,
    #[sqlx(rename = "guestCount")]
    pub guest_count: Option<i32>,
    #[sqlx(rename = "durationHours")]
    pub duration_hours: Option<i32>,
    #[sqlx(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[sqlx(rename = "dropoffLocation")]
    pub dropoff_location: Option<String>,
    pub details: Option<String>,
    pub status: String,
    #[sqlx(rename = "quotedAmount")]
    pub quoted_amount: Option<Decimal>,
    #[sqlx(rename = "adminNotes")]
    pub admin_notes: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl QuoteRow {
    pub fn into_entity(self) -> Quote {
        Quote {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            event_type: self.event_type,
            preferred_vehicle_id: self.preferred_vehicle_id,
            event_date: self.event_date,
            pickup_time: self.pickup_time,
            guest_count: self.guest_count,
            duration_hours: self.duration_hours,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            details: self.details,
            status: QuoteStatus::from_code(&self.status).unwrap_or(QuoteStatus::New),
            quoted_amount: self.quoted_amount,
            admin_notes: self.admin_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(quote: &Quote) -> Self {
        Self {
            id: quote.id,
            name: quote.name.clone(),
            email: quote.email.clone(),
            phone: quote.phone.clone(),
            event_type: quote.event_type.clone(),
            preferred_vehicle_id: quote.preferred_vehicle_id,
            event_date: quote.event_date,
            pickup_time: quote.pickup_time.clone(),
            guest_count: quote.guest_count,
            duration_hours: quote.duration_hours,
            pickup_location: quote.pickup_location.clone(),
            dropoff_location: quote.dropoff_location.clone(),
            details: quote.details.clone(),
            status: quote.status.code().to_string(),
            quoted_amount: quote.quoted_amount,
            admin_notes: quote.admin_notes.clone(),
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        }
    }
}

/// Decide si la Quote bloqueada puede materializarse como Booking.
/// Un estado terminal recibe Invalid Transition; una Quote con Booking
/// derivado ya existente recibe Conflict, de modo que repetir la
/// conversión nunca produce un segundo Booking.
fn check_conversion(quote: &Quote, already_converted: bool) -> Result<(), AppError> {
    if !quote.status.can_transition(QuoteStatus::Booked) {
        return Err(invalid_transition_error(
            "Quote",
            quote.status.label(),
            QuoteStatus::Booked.label(),
        ));
    }
    if already_converted {
        return Err(AppError::Conflict(format!(
            "Quote '{}' has already been converted to a booking",
            quote.id
        )));
    }
    Ok(())
}

pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta una solicitud recién validada. Siempre entra como NEW.
    pub async fn create(&self, new_quote: &NewQuote) -> Result<Quote, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            INSERT INTO quotes
                (id, name, email, phone, "eventType", "preferredVehicleId", "eventDate",
                 "pickupTime", "guestCount", "durationHours", "pickupLocation",
                 "dropoffLocation", details, status, "createdAt", "updatedAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'NEW',
                    NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_quote.name)
        .bind(&new_quote.email)
        .bind(&new_quote.phone)
        .bind(&new_quote.event_type)
        .bind(new_quote.preferred_vehicle_id)
        .bind(new_quote.event_date)
        .bind(&new_quote.pickup_time)
        .bind(new_quote.guest_count)
        .bind(new_quote.duration_hours)
        .bind(&new_quote.pickup_location)
        .bind(&new_quote.dropoff_location)
        .bind(&new_quote.details)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    /// Todas las solicitudes, más recientes primero (bandeja admin)
    pub async fn list(&self) -> Result<Vec<Quote>, AppError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"SELECT * FROM quotes ORDER BY "createdAt" DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuoteRow::into_entity).collect())
    }

    /// Últimas solicitudes para el dashboard
    pub async fn recent(&self, limit: i64) -> Result<Vec<Quote>, AppError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"SELECT * FROM quotes ORDER BY "createdAt" DESC LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuoteRow::into_entity).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Quote>, AppError> {
        let row = sqlx::query_as::<_, QuoteRow>("SELECT * FROM quotes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(QuoteRow::into_entity))
    }

    /// Patch parcial: carga, aplica solo los campos presentes y reescribe.
    /// La validación de la transición de estado la hace el controller;
    /// aquí solo se aplica el resultado.
    pub async fn update(&self, id: Uuid, patch: &UpdateQuoteRequest) -> Result<Quote, AppError> {
        let mut quote = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;

        if let Some(status) = patch.status {
            quote.status = status;
        }
        if let Some(admin_notes) = &patch.admin_notes {
            quote.admin_notes = admin_notes.clone();
        }
        if let Some(quoted_amount) = patch.quoted_amount {
            quote.quoted_amount = quoted_amount;
        }

        let row = sqlx::query_as::<_, QuoteRow>(
            r#"
            UPDATE quotes SET
                status = $2,
                "adminNotes" = $3,
                "quotedAmount" = $4,
                "updatedAt" = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(quote.status.code())
        .bind(&quote.admin_notes)
        .bind(quote.quoted_amount)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_entity())
    }

    /// Conteo por estado (tarjetas del dashboard)
    pub async fn count_by_status(&self, status: QuoteStatus) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quotes WHERE status = $1")
            .bind(status.code())
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Conversion Workflow: materializa la Quote como Booking.
    ///
    /// Una sola transacción: bloquea el row de la Quote (FOR UPDATE),
    /// comprueba que no exista ya un Booking derivado, inserta el Booking
    /// y marca la Quote como BOOKED. Dos conversiones concurrentes se
    /// serializan en el lock y la segunda recibe Conflict.
    pub async fn convert_to_booking(&self, id: Uuid) -> Result<(Quote, Booking), AppError> {
        let mut tx = self.pool.begin().await?;

        let quote_row = sqlx::query_as::<_, QuoteRow>(
            "SELECT * FROM quotes WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;

        let quote = quote_row.into_entity();

        let (already_converted,): (bool,) = sqlx::query_as(
            r#"SELECT EXISTS(SELECT 1 FROM bookings WHERE "quoteId" = $1)"#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        check_conversion(&quote, already_converted)?;

        let new_booking = NewBooking::from_quote(&quote);
        let booking_row = insert_booking(&mut *tx, &new_booking).await?;

        let updated_row = sqlx::query_as::<_, QuoteRow>(
            r#"UPDATE quotes SET status = 'BOOKED', "updatedAt" = NOW()
               WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((updated_row.into_entity(), booking_row.into_entity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_quote() -> Quote {
        Quote {
            id: Uuid::new_v4(),
            name: "Marcus T.".to_string(),
            email: "marcus@example.com".to_string(),
            phone: "7025551234".to_string(),
            event_type: "Bachelor Party".to_string(),
            preferred_vehicle_id: Some(Uuid::new_v4()),
            event_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            pickup_time: Some("21:00".to_string()),
            guest_count: Some(20),
            duration_hours: Some(4),
            pickup_location: Some("Bellagio".to_string()),
            dropoff_location: None,
            details: None,
            status: QuoteStatus::Quoted,
            quoted_amount: Some(Decimal::new(95000, 2)),
            admin_notes: Some("VIP".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_mapping_round_trip_is_stable() {
        let quote = sample_quote();
        let store = QuoteRow::from_entity(&quote);
        let back = store.clone().into_entity();
        let store_again = QuoteRow::from_entity(&back);

        assert_eq!(store.status, "QUOTED");
        assert_eq!(store.status, store_again.status);
        assert_eq!(store.preferred_vehicle_id, store_again.preferred_vehicle_id);
        assert_eq!(store.quoted_amount, store_again.quoted_amount);
        assert_eq!(store.event_date, store_again.event_date);
        assert_eq!(store.admin_notes, store_again.admin_notes);
    }

    #[test]
    fn test_unknown_status_code_defaults_to_new() {
        let mut row = QuoteRow::from_entity(&sample_quote());
        row.status = "ARCHIVED".to_string();
        assert_eq!(row.into_entity().status, QuoteStatus::New);
    }

    /// Repetir la conversión no crea un segundo Booking: la Quote quedó
    /// BOOKED y el Booking derivado ya existe, así que la segunda llamada
    /// recibe Conflict (HTTP 409).
    #[test]
    fn test_repeated_conversion_is_rejected_with_conflict() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let mut quote = sample_quote();
        quote.status = QuoteStatus::Booked;

        let err = check_conversion(&quote, true).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_terminal_quote_cannot_convert() {
        let mut quote = sample_quote();
        quote.status = QuoteStatus::Cancelled;

        let err = check_conversion(&quote, false).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }

    #[test]
    fn test_open_quote_converts() {
        for status in [QuoteStatus::New, QuoteStatus::Contacted, QuoteStatus::Quoted] {
            let mut quote = sample_quote();
            quote.status = status;
            assert!(check_conversion(&quote, false).is_ok());
        }
    }
}
