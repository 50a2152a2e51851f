//! DTOs de Quote

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::quote::QuoteStatus;

/// Request del formulario público de presupuesto.
///
/// Reglas: name >= 2, email con formato válido, phone >= 7 caracteres,
/// event_type y event_date no vacíos. El resto es opcional y se
/// persiste como NULL cuando falta.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuoteRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 7, max = 30))]
    pub phone: String,

    #[validate(length(min = 1, max = 100))]
    pub event_type: String,

    /// Slug del vehículo preferido; se resuelve a id (o null) al persistir
    pub preferred_vehicle: Option<String>,

    /// Fecha del evento en formato YYYY-MM-DD
    #[validate(length(min = 1))]
    pub event_date: String,

    pub pickup_time: Option<String>,

    #[validate(range(min = 1, max = 500))]
    pub guest_count: Option<i32>,

    #[validate(range(min = 1, max = 48))]
    pub duration_hours: Option<i32>,

    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub details: Option<String>,
}

/// Patch administrativo sobre una Quote.
///
/// Solo se aplican los campos presentes. `admin_notes` y `quoted_amount`
/// usan doble Option: ausente = no tocar, null explícito = limpiar.
/// `force` se salta la tabla de transiciones (override de staff).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuoteRequest {
    pub status: Option<QuoteStatus>,

    #[serde(default, deserialize_with = "super::double_option")]
    pub admin_notes: Option<Option<String>>,

    #[serde(default, deserialize_with = "super::double_option")]
    pub quoted_amount: Option<Option<Decimal>>,

    #[serde(default)]
    pub force: bool,
}

impl UpdateQuoteRequest {
    /// Patch de las quick actions: fija el estado conservando las
    /// ediciones pendientes de notas/importe del mismo gesto.
    pub fn with_status(mut self, status: QuoteStatus) -> Self {
        self.status = Some(status);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Jessica L.",
            "email": "jessica@example.com",
            "phone": "7025559999",
            "event_type": "Bachelorette Party",
            "event_date": "2026-06-01",
            "guest_count": 20,
            "preferred_vehicle": "the-sovereign"
        })
    }

    #[test]
    fn test_valid_submission_passes() {
        let request: SubmitQuoteRequest = serde_json::from_value(valid_body()).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_email_without_at_fails() {
        let mut body = valid_body();
        body["email"] = serde_json::json!("not-an-email");
        let request: SubmitQuoteRequest = serde_json::from_value(body).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_short_phone_fails() {
        let mut body = valid_body();
        body["phone"] = serde_json::json!("12345");
        let request: SubmitQuoteRequest = serde_json::from_value(body).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_short_name_fails() {
        let mut body = valid_body();
        body["name"] = serde_json::json!("J");
        let request: SubmitQuoteRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let absent: UpdateQuoteRequest = serde_json::from_str(r#"{"status":"quoted"}"#).unwrap();
        assert!(absent.admin_notes.is_none());
        assert!(absent.quoted_amount.is_none());

        let cleared: UpdateQuoteRequest =
            serde_json::from_str(r#"{"admin_notes":null,"quoted_amount":null}"#).unwrap();
        assert_eq!(cleared.admin_notes, Some(None));
        assert_eq!(cleared.quoted_amount, Some(None));

        let set: UpdateQuoteRequest =
            serde_json::from_str(r#"{"admin_notes":"call back","quoted_amount":"950.00"}"#)
                .unwrap();
        assert_eq!(set.admin_notes, Some(Some("call back".to_string())));
        assert_eq!(
            set.quoted_amount,
            Some(Some(Decimal::new(95000, 2)))
        );
    }

    #[test]
    fn test_force_defaults_to_false() {
        let patch: UpdateQuoteRequest = serde_json::from_str(r#"{"status":"new"}"#).unwrap();
        assert!(!patch.force);
    }
}
