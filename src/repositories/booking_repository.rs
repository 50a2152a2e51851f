//! Repositorio de Booking
//!
//! Reservas confirmadas. Sin fallback: son datos administrativos y sus
//! lecturas/escrituras fallan en voz alta si el almacén no responde.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, NewBooking};
use crate::utils::errors::{not_found_error, AppError};

/// Fila nativa del almacén para bookings
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    #[sqlx(rename = "quoteId")]
    pub quote_id: Option<Uuid>,
    #[sqlx(rename = "clientName")]
    pub client_name: String,
    #[sqlx(rename = "clientEmail")]
    pub client_email: Option<String>,
    #[sqlx(rename = "clientPhone")]
    pub client_phone: Option<String>,
    #[sqlx(rename = "eventType")]
    pub event_type: String,
    #[sqlx(rename = "vehicleId")]
    pub vehicle_id: Option<Uuid>,
    #[sqlx(rename = "bookingDate")]
    pub booking_date: chrono::NaiveDate,
    #[sqlx(rename = "startTime")]
    pub start_time: String,
    #[sqlx(rename = "endTime")]
    pub end_time: Option<String>,
    #[sqlx(rename = "durationHours")]
    pub duration_hours: Option<i32>,
    #[sqlx(rename = "pickupLocation")]
    pub pickup_location: Option<String>,
    #[sqlx(rename = "dropoffLocation")]
    pub dropoff_location: Option<String>,
    #[sqlx(rename = "guestCount")]
    pub guest_count: Option<i32>,
    #[sqlx(rename = "totalAmount")]
    pub total_amount: Option<Decimal>,
    #[sqlx(rename = "depositAmount")]
    pub deposit_amount: Option<Decimal>,
    #[sqlx(rename = "depositPaid")]
    pub deposit_paid: bool,
    pub status: String,
    pub notes: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl BookingRow {
    pub fn into_entity(self) -> Booking {
        Booking {
            id: self.id,
            quote_id: self.quote_id,
            client_name: self.client_name,
            client_email: self.client_email,
            client_phone: self.client_phone,
            event_type: self.event_type,
            vehicle_id: self.vehicle_id,
            booking_date: self.booking_date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_hours: self.duration_hours,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            guest_count: self.guest_count,
            total_amount: self.total_amount,
            deposit_amount: self.deposit_amount,
            deposit_paid: self.deposit_paid,
            status: BookingStatus::from_code(&self.status).unwrap_or(BookingStatus::Pending),
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            quote_id: booking.quote_id,
            client_name: booking.client_name.clone(),
            client_email: booking.client_email.clone(),
            client_phone: booking.client_phone.clone(),
            event_type: booking.event_type.clone(),
            vehicle_id: booking.vehicle_id,
            booking_date: booking.booking_date,
            start_time: booking.start_time.clone(),
            end_time: booking.end_time.clone(),
            duration_hours: booking.duration_hours,
            pickup_location: booking.pickup_location.clone(),
            dropoff_location: booking.dropoff_location.clone(),
            guest_count: booking.guest_count,
            total_amount: booking.total_amount,
            deposit_amount: booking.deposit_amount,
            deposit_paid: booking.deposit_paid,
            status: booking.status.code().to_string(),
            notes: booking.notes.clone(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Inserta un booking con el executor recibido. El Conversion Workflow
/// lo usa dentro de su transacción; la creación directa, con el pool.
pub async fn insert_booking<'e, E>(
    executor: E,
    new_booking: &NewBooking,
) -> Result<BookingRow, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, BookingRow>(
        r#"
        INSERT INTO bookings
            (id, "quoteId", "clientName", "clientEmail", "clientPhone", "eventType",
             "vehicleId", "bookingDate", "startTime", "endTime", "durationHours",
             "pickupLocation", "dropoffLocation", "guestCount", "totalAmount",
             "depositAmount", "depositPaid", status, notes, "createdAt", "updatedAt")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new_booking.quote_id)
    .bind(&new_booking.client_name)
    .bind(&new_booking.client_email)
    .bind(&new_booking.client_phone)
    .bind(&new_booking.event_type)
    .bind(new_booking.vehicle_id)
    .bind(new_booking.booking_date)
    .bind(&new_booking.start_time)
    .bind(&new_booking.end_time)
    .bind(new_booking.duration_hours)
    .bind(&new_booking.pickup_location)
    .bind(&new_booking.dropoff_location)
    .bind(new_booking.guest_count)
    .bind(new_booking.total_amount)
    .bind(new_booking.deposit_amount)
    .bind(new_booking.deposit_paid)
    .bind(new_booking.status.code())
    .bind(&new_booking.notes)
    .fetch_one(executor)
    .await
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creación directa por el staff (sin Quote origen)
    pub async fn create(&self, new_booking: &NewBooking) -> Result<Booking, AppError> {
        let row = insert_booking(&self.pool, new_booking).await?;
        Ok(row.into_entity())
    }

    /// Todas las reservas, por fecha de reserva ascendente (tabla y calendario)
    pub async fn list(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"SELECT * FROM bookings ORDER BY "bookingDate" ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingRow::into_entity).collect())
    }

    /// Próximas reservas abiertas para el dashboard
    pub async fn upcoming(&self, limit: i64) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"SELECT * FROM bookings
               WHERE status NOT IN ('COMPLETED', 'CANCELLED')
               ORDER BY "bookingDate" ASC
               LIMIT $1"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookingRow::into_entity).collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query_as::<_, BookingRow>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BookingRow::into_entity))
    }

    /// Transición de estado de un solo campo. Sin tabla de transiciones:
    /// el staff puede fijar cualquier estado (decisión de diseño, §4.2).
    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"UPDATE bookings SET status = $2, "updatedAt" = NOW() WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(status.code())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        Ok(row.into_entity())
    }

    /// Reservas abiertas (dashboard)
    pub async fn count_open(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings WHERE status NOT IN ('COMPLETED', 'CANCELLED')",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Ingresos del mes en curso (suma de totalAmount)
    pub async fn monthly_revenue(&self) -> Result<Decimal, AppError> {
        let result: (Decimal,) = sqlx::query_as(
            r#"SELECT COALESCE(SUM("totalAmount"), 0)
               FROM bookings
               WHERE "createdAt" >= date_trunc('month', NOW())"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn sample_booking() -> Booking {
        Booking {
            id: Uuid::new_v4(),
            quote_id: Some(Uuid::new_v4()),
            client_name: "Jessica L.".to_string(),
            client_email: Some("jessica@example.com".to_string()),
            client_phone: Some("7025559999".to_string()),
            event_type: "Bachelorette Party".to_string(),
            vehicle_id: None,
            booking_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            start_time: "TBD".to_string(),
            end_time: None,
            duration_hours: Some(4),
            pickup_location: None,
            dropoff_location: None,
            guest_count: Some(20),
            total_amount: Some(Decimal::new(120000, 2)),
            deposit_amount: Some(Decimal::new(30000, 2)),
            deposit_paid: true,
            status: BookingStatus::DepositPaid,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_mapping_round_trip_is_stable() {
        let booking = sample_booking();
        let store = BookingRow::from_entity(&booking);
        let back = store.clone().into_entity();
        let store_again = BookingRow::from_entity(&back);

        assert_eq!(store.status, "DEPOSIT_PAID");
        assert_eq!(store.status, store_again.status);
        assert_eq!(store.quote_id, store_again.quote_id);
        assert_eq!(store.total_amount, store_again.total_amount);
        assert_eq!(store.deposit_amount, store_again.deposit_amount);
        assert_eq!(store.booking_date, store_again.booking_date);
        assert_eq!(store.start_time, store_again.start_time);
    }

    #[test]
    fn test_unknown_status_code_defaults_to_pending() {
        let mut row = BookingRow::from_entity(&sample_booking());
        row.status = "ON_HOLD".to_string();
        assert_eq!(row.into_entity().status, BookingStatus::Pending);
    }
}
