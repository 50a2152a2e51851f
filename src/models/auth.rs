//! Modelos de autenticación
//!
//! Usuarios administrativos y los tipos de request/response del login.
//! El rol se persiste como código (`ADMIN`), igual que el resto de
//! enumerados del almacén.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Rol que habilita el acceso a la API administrativa
pub const ADMIN_ROLE: &str = "ADMIN";

/// Usuario administrativo - mapea a la tabla users del almacén
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[sqlx(rename = "hashedPassword")]
    pub hashed_password: String,
    pub role: String,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response de login con el token de sesión
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub email: String,
    pub name: String,
}
