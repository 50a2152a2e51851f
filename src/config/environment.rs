//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración del servicio de reservas.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Vida del token en segundos
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// API key del proveedor de email; si falta, las notificaciones se omiten
    pub notify_api_key: Option<String>,
    pub notify_api_url: String,
    pub notify_from: String,
    pub notify_to: String,
    /// Directorio local donde se guardan las imágenes subidas por el staff
    pub upload_dir: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            notify_api_key: env::var("NOTIFY_API_KEY").ok(),
            notify_api_url: env::var("NOTIFY_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            notify_from: env::var("NOTIFY_FROM")
                .unwrap_or_else(|_| "reservations@americanroyaltylv.com".to_string()),
            notify_to: env::var("NOTIFY_TO")
                .unwrap_or_else(|_| "bookings@americanroyaltylv.com".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
