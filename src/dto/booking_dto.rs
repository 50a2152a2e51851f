//! DTOs de Booking

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::BookingStatus;

/// Cambio de estado de una reserva (operación de un solo campo)
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Creación directa de una reserva por el staff (sin Quote origen).
///
/// Invariantes financieras: total_amount >= deposit_amount cuando ambos
/// existen; deposit_paid exige un deposit_amount registrado. Se
/// comprueban en el controller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub quote_id: Option<Uuid>,

    #[validate(length(min = 2, max = 100))]
    pub client_name: String,

    #[validate(email)]
    pub client_email: Option<String>,

    pub client_phone: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub event_type: String,

    pub vehicle_id: Option<Uuid>,

    /// Fecha de la reserva en formato YYYY-MM-DD
    #[validate(length(min = 1))]
    pub booking_date: String,

    #[validate(length(min = 1, max = 20))]
    pub start_time: String,

    pub end_time: Option<String>,

    #[validate(range(min = 1, max = 48))]
    pub duration_hours: Option<i32>,

    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,

    #[validate(range(min = 1, max = 500))]
    pub guest_count: Option<i32>,

    pub total_amount: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,

    #[serde(default)]
    pub deposit_paid: bool,

    /// Estado inicial; `pending` cuando no se indica
    pub status: Option<BookingStatus>,

    pub notes: Option<String>,
}
