//! DTOs de Testimonial

use serde::Deserialize;
use validator::Validate;

use super::double_option;

/// Request para crear un testimonio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub event_type: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000))]
    pub text: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Patch parcial de un testimonio: solo se aplican los campos presentes.
/// `event_type` usa doble Option: ausente no toca, null limpia.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub event_type: Option<Option<String>>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,

    #[validate(length(min = 1, max = 2000))]
    pub text: Option<String>,

    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_out_of_range_fails() {
        let request = CreateTestimonialRequest {
            name: "Amanda P.".to_string(),
            event_type: Some("Birthday Celebration".to_string()),
            rating: 6,
            text: "Best birthday ever!".to_string(),
            is_featured: true,
            is_active: true,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null_event_type() {
        let absent: UpdateTestimonialRequest =
            serde_json::from_value(serde_json::json!({ "rating": 5 })).unwrap();
        assert_eq!(absent.event_type, None);

        let cleared: UpdateTestimonialRequest =
            serde_json::from_value(serde_json::json!({ "event_type": null })).unwrap();
        assert_eq!(cleared.event_type, Some(None));

        let replaced: UpdateTestimonialRequest =
            serde_json::from_value(serde_json::json!({ "event_type": "Wedding" })).unwrap();
        assert_eq!(replaced.event_type, Some(Some("Wedding".to_string())));
    }
}
