//! Controller de Uploads
//!
//! Subida de imágenes de flota por el staff. Solo imágenes, con tope de
//! 10MB; los ficheros se guardan bajo el directorio configurado y se
//! sirven como estáticos en /uploads.

use std::path::PathBuf;

use axum::extract::Multipart;
use tracing::info;
use uuid::Uuid;

use crate::dto::common::UploadResponse;
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};

/// Tope de tamaño por fichero
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Reglas de admisión: tipo imagen y tamaño dentro del tope
fn validate_upload(content_type: Option<&str>, size: usize) -> Result<(), AppError> {
    match content_type {
        Some(ct) if ct.starts_with("image/") => {}
        _ => return Err(validation_error("file", "must be an image")),
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(validation_error("file", "must be under 10MB"));
    }
    Ok(())
}

/// Extensión saneada del nombre original; "jpg" si falta o no es fiable.
/// Solo caracteres alfanuméricos: el nombre del cliente nunca participa
/// en la ruta final.
fn safe_extension(filename: Option<&str>) -> String {
    filename
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .filter(|ext| {
            !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "jpg".to_string())
}

pub struct UploadController {
    upload_dir: PathBuf,
}

impl UploadController {
    pub fn new(state: &AppState) -> Self {
        Self {
            upload_dir: PathBuf::from(&state.config.upload_dir),
        }
    }

    /// Recibe el campo multipart `file`, lo valida y lo persiste con un
    /// nombre generado bajo fleet/
    pub async fn upload_image(
        &self,
        admin: &AuthenticatedAdmin,
        mut multipart: Multipart,
    ) -> Result<UploadResponse, AppError> {
        require_admin(admin)?;

        let field = loop {
            let next = multipart
                .next_field()
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?;

            match next {
                Some(field) if field.name() == Some("file") => break field,
                Some(_) => continue,
                None => return Err(validation_error("file", "is required")),
            }
        };

        let content_type = field.content_type().map(|ct| ct.to_string());
        let extension = safe_extension(field.file_name());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read upload: {}", e)))?;

        validate_upload(content_type.as_deref(), data.len())?;

        let relative = format!("fleet/{}.{}", Uuid::new_v4(), extension);
        let path = self.upload_dir.join(&relative);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Internal(format!("Could not prepare upload dir: {}", e)))?;
        }
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(format!("Could not store upload: {}", e)))?;

        info!("🖼️ Imagen de flota subida: {} ({} bytes)", relative, data.len());

        Ok(UploadResponse {
            url: format!("/uploads/{}", relative),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_image_content_type_is_rejected() {
        assert!(validate_upload(Some("application/pdf"), 1024).is_err());
        assert!(validate_upload(None, 1024).is_err());
        assert!(validate_upload(Some("image/png"), 1024).is_ok());
    }

    #[test]
    fn test_oversized_upload_is_rejected() {
        assert!(validate_upload(Some("image/jpeg"), MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload(Some("image/jpeg"), MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn test_extension_is_sanitized() {
        assert_eq!(safe_extension(Some("party-bus.PNG")), "png");
        assert_eq!(safe_extension(Some("no-extension")), "jpg");
        assert_eq!(safe_extension(Some("sneaky.../../etc")), "jpg");
        assert_eq!(safe_extension(None), "jpg");
    }
}
