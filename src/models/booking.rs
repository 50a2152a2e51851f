//! Modelo de Booking
//!
//! Un Booking es una reserva confirmada, normalmente materializada desde
//! una Quote por el Conversion Workflow. Incluye la forma de inserción
//! NewBooking y la construcción pura desde una Quote.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::quote::Quote;

/// Placeholder literal cuando la Quote origen no traía hora de recogida
pub const START_TIME_TBD: &str = "TBD";

/// Estado del ciclo de vida de un Booking.
///
/// A diferencia del grafo de Quote, aquí NO se valida el orden de las
/// transiciones: el staff puede fijar cualquier estado desde cualquier
/// otro. Es una decisión de diseño explícita, no una omisión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    DepositPaid,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Código con el que se persiste en el almacén
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::DepositPaid => "DEPOSIT_PAID",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING" => Some(BookingStatus::Pending),
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "DEPOSIT_PAID" => Some(BookingStatus::DepositPaid),
            "IN_PROGRESS" => Some(BookingStatus::InProgress),
            "COMPLETED" => Some(BookingStatus::Completed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::DepositPaid => "deposit_paid",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Estados que cuentan como "abiertos" en el dashboard y el calendario
    pub fn is_open(&self) -> bool {
        !matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

/// Booking - forma pública de una reserva confirmada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Quote origen; null cuando el staff creó la reserva directamente
    pub quote_id: Option<Uuid>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub event_type: String,
    pub vehicle_id: Option<Uuid>,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_hours: Option<i32>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub guest_count: Option<i32>,
    pub total_amount: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    pub deposit_paid: bool,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Forma de inserción de un Booking
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub quote_id: Option<Uuid>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub event_type: String,
    pub vehicle_id: Option<Uuid>,
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_hours: Option<i32>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub guest_count: Option<i32>,
    pub total_amount: Option<Decimal>,
    pub deposit_amount: Option<Decimal>,
    pub deposit_paid: bool,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

impl NewBooking {
    /// Construye el Booking que materializa una Quote (Conversion Workflow).
    ///
    /// Copia contacto y campos de evento; `booking_date` ← `event_date`,
    /// `start_time` ← `pickup_time` (o `"TBD"` si falta),
    /// `total_amount` ← `quoted_amount`, `notes` ← `admin_notes`,
    /// y el estado queda fijo en `confirmed`.
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            quote_id: Some(quote.id),
            client_name: quote.name.clone(),
            client_email: Some(quote.email.clone()),
            client_phone: Some(quote.phone.clone()),
            event_type: quote.event_type.clone(),
            vehicle_id: quote.preferred_vehicle_id,
            booking_date: quote.event_date,
            start_time: quote
                .pickup_time
                .clone()
                .unwrap_or_else(|| START_TIME_TBD.to_string()),
            end_time: None,
            duration_hours: quote.duration_hours,
            pickup_location: quote.pickup_location.clone(),
            dropoff_location: quote.dropoff_location.clone(),
            guest_count: quote.guest_count,
            total_amount: quote.quoted_amount,
            deposit_amount: None,
            deposit_paid: false,
            status: BookingStatus::Confirmed,
            notes: quote.admin_notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quote::QuoteStatus;

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
            dropoff_location: Some("Fremont Street".to_string()),
            details: Some("Birthday crew".to_string()),
            status: QuoteStatus::Quoted,
            quoted_amount: Some(Decimal::from(1000)),
            admin_notes: Some("VIP client".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_booking_status_code_round_trip() {
        for s in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::DepositPaid,
            BookingStatus::InProgress,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(BookingStatus::from_code("ON_HOLD"), None);
    }

    #[test]
    fn test_is_open() {
        assert!(BookingStatus::Pending.is_open());
        assert!(BookingStatus::DepositPaid.is_open());
        assert!(!BookingStatus::Completed.is_open());
        assert!(!BookingStatus::Cancelled.is_open());
    }

    #[test]
    fn test_from_quote_carries_fields_over() {
        let quote = sample_quote();
        let booking = NewBooking::from_quote(&quote);

        assert_eq!(booking.quote_id, Some(quote.id));
        assert_eq!(booking.client_name, quote.name);
        assert_eq!(booking.client_email.as_deref(), Some("marcus@example.com"));
        assert_eq!(booking.client_phone.as_deref(), Some("7025551234"));
        assert_eq!(booking.event_type, quote.event_type);
        assert_eq!(booking.vehicle_id, quote.preferred_vehicle_id);
        assert_eq!(booking.booking_date, quote.event_date);
        assert_eq!(booking.start_time, "21:00");
        assert_eq!(booking.duration_hours, Some(4));
        assert_eq!(booking.guest_count, Some(20));
        assert_eq!(booking.total_amount, Some(Decimal::from(1000)));
        assert_eq!(booking.notes.as_deref(), Some("VIP client"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(!booking.deposit_paid);
        assert_eq!(booking.deposit_amount, None);
    }

    #[test]
    fn test_from_quote_uses_tbd_placeholder() {
        let mut quote = sample_quote();
        quote.pickup_time = None;

        let booking = NewBooking::from_quote(&quote);
        assert_eq!(booking.start_time, START_TIME_TBD);
    }

    #[test]
    fn test_booking_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::DepositPaid).unwrap(),
            "\"deposit_paid\""
        );
        let parsed: BookingStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(parsed, BookingStatus::InProgress);
    }
}
