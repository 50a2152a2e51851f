//! Modelo de Quote
//!
//! Una Quote es la solicitud de presupuesto que llega desde el formulario
//! público. Este módulo contiene su forma pública, el enum de estados con
//! la tabla de transiciones y la forma de inserción NewQuote.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado del ciclo de vida de una Quote.
///
/// Grafo permitido: `new → contacted → quoted → booked`, con `cancelled`
/// alcanzable desde cualquier estado no terminal y `completed` solo desde
/// `booked`. `completed` y `cancelled` son terminales. La re-entrada al
/// mismo estado es idempotente (incluida `booked`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    New,
    Contacted,
    Quoted,
    Booked,
    Completed,
    Cancelled,
}

impl QuoteStatus {
    /// Código con el que se persiste en el almacén
    pub fn code(&self) -> &'static str {
        match self {
            QuoteStatus::New => "NEW",
            QuoteStatus::Contacted => "CONTACTED",
            QuoteStatus::Quoted => "QUOTED",
            QuoteStatus::Booked => "BOOKED",
            QuoteStatus::Completed => "COMPLETED",
            QuoteStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NEW" => Some(QuoteStatus::New),
            "CONTACTED" => Some(QuoteStatus::Contacted),
            "QUOTED" => Some(QuoteStatus::Quoted),
            "BOOKED" => Some(QuoteStatus::Booked),
            "COMPLETED" => Some(QuoteStatus::Completed),
            "CANCELLED" => Some(QuoteStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::New => "new",
            QuoteStatus::Contacted => "contacted",
            QuoteStatus::Quoted => "quoted",
            QuoteStatus::Booked => "booked",
            QuoteStatus::Completed => "completed",
            QuoteStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QuoteStatus::Completed | QuoteStatus::Cancelled)
    }

    /// Tabla de transiciones del Quote Lifecycle Manager.
    ///
    /// El staff puede saltarse la tabla con el flag `force` del patch
    /// (ver `UpdateQuoteRequest`), que queda como válvula de escape
    /// documentada.
    pub fn can_transition(&self, to: QuoteStatus) -> bool {
        if *self == to {
            // Re-entrada idempotente; en estados terminales tampoco hay no-op
            return !self.is_terminal();
        }

        match self {
            QuoteStatus::New => matches!(
                to,
                QuoteStatus::Contacted
                    | QuoteStatus::Quoted
                    | QuoteStatus::Booked
                    | QuoteStatus::Cancelled
            ),
            QuoteStatus::Contacted => matches!(
                to,
                QuoteStatus::Quoted | QuoteStatus::Booked | QuoteStatus::Cancelled
            ),
            QuoteStatus::Quoted => {
                matches!(to, QuoteStatus::Booked | QuoteStatus::Cancelled)
            }
            QuoteStatus::Booked => {
                matches!(to, QuoteStatus::Completed | QuoteStatus::Cancelled)
            }
            QuoteStatus::Completed | QuoteStatus::Cancelled => false,
        }
    }
}

/// Quote - forma pública de una solicitud de presupuesto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub preferred_vehicle_id: Option<Uuid>,
    pub event_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub guest_count: Option<i32>,
    pub duration_hours: Option<i32>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub details: Option<String>,
    pub status: QuoteStatus,
    pub quoted_amount: Option<Decimal>,
    /// Nunca se expone en vistas públicas, solo en la API admin
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Forma de inserción de una Quote (tras validar y resolver el slug
/// del vehículo preferido)
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub preferred_vehicle_id: Option<Uuid>,
    pub event_date: NaiveDate,
    pub pickup_time: Option<String>,
    pub guest_count: Option<i32>,
    pub duration_hours: Option<i32>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_round_trip() {
        for s in [
            QuoteStatus::New,
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Booked,
            QuoteStatus::Completed,
            QuoteStatus::Cancelled,
        ] {
            assert_eq!(QuoteStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(QuoteStatus::from_code("UNKNOWN"), None);
    }

    #[test]
    fn test_forward_transitions() {
        assert!(QuoteStatus::New.can_transition(QuoteStatus::Contacted));
        assert!(QuoteStatus::Contacted.can_transition(QuoteStatus::Quoted));
        assert!(QuoteStatus::Quoted.can_transition(QuoteStatus::Booked));
        assert!(QuoteStatus::Booked.can_transition(QuoteStatus::Completed));
    }

    #[test]
    fn test_cancel_from_any_non_terminal() {
        for s in [
            QuoteStatus::New,
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Booked,
        ] {
            assert!(s.can_transition(QuoteStatus::Cancelled));
        }
    }

    #[test]
    fn test_no_path_back_to_new() {
        for s in [
            QuoteStatus::Contacted,
            QuoteStatus::Quoted,
            QuoteStatus::Booked,
            QuoteStatus::Completed,
            QuoteStatus::Cancelled,
        ] {
            assert!(!s.can_transition(QuoteStatus::New));
        }
    }

    #[test]
    fn test_terminal_states_reject_everything() {
        for terminal in [QuoteStatus::Completed, QuoteStatus::Cancelled] {
            for to in [
                QuoteStatus::New,
                QuoteStatus::Contacted,
                QuoteStatus::Quoted,
                QuoteStatus::Booked,
                QuoteStatus::Completed,
                QuoteStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition(to), "{:?} -> {:?}", terminal, to);
            }
        }
    }

    #[test]
    fn test_booked_reentry_is_idempotent() {
        assert!(QuoteStatus::Booked.can_transition(QuoteStatus::Booked));
        assert!(QuoteStatus::New.can_transition(QuoteStatus::New));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Contacted).unwrap(),
            "\"contacted\""
        );
        let parsed: QuoteStatus = serde_json::from_str("\"booked\"").unwrap();
        assert_eq!(parsed, QuoteStatus::Booked);
    }
}
