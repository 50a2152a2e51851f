//! DTOs del formulario de contacto

use serde::Deserialize;
use validator::Validate;

/// Request del formulario público de contacto.
///
/// Sin ciclo de vida: se valida, se registra en el log y se notifica
/// al staff best-effort. No se persiste.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message_passes() {
        let request = ContactMessageRequest {
            name: "Tyler M.".to_string(),
            email: "tyler@example.com".to_string(),
            phone: None,
            message: "Do you have availability for CES week?".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_message_under_ten_chars_fails() {
        let request = ContactMessageRequest {
            name: "Tyler M.".to_string(),
            email: "tyler@example.com".to_string(),
            phone: None,
            message: "hi".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }
}
