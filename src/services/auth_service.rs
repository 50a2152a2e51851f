//! Servicio de autenticación
//!
//! Login de usuarios administrativos contra la tabla users con bcrypt
//! y emisión del token JWT de sesión.

use bcrypt::verify;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::EnvironmentConfig;
use crate::middleware::auth::generate_jwt_token;
use crate::models::auth::{AdminUser, LoginRequest, LoginResponse};
use crate::utils::errors::AppError;

pub struct AuthService {
    pool: PgPool,
    config: EnvironmentConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    /// Verifica las credenciales y emite un token de sesión.
    /// Credenciales malas y usuario inexistente responden igual.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let user = sqlx::query_as::<_, AdminUser>(
            r#"SELECT id, email, name, "hashedPassword", role, "createdAt"
               FROM users WHERE email = $1"#,
        )
        .bind(&request.email)
        .fetch_optional(&self.pool)
        .await?;

        let user = match user {
            Some(user) => user,
            None => {
                warn!("🔐 Login fallido: usuario desconocido");
                return Err(AppError::Unauthorized("Invalid credentials".to_string()));
            }
        };

        let password_ok = verify(&request.password, &user.hashed_password)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !password_ok {
            warn!("🔐 Login fallido: contraseña incorrecta para {}", user.email);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let (token, expires_at) = generate_jwt_token(&user, &self.config)?;
        info!("🔐 Login correcto: {}", user.email);

        Ok(LoginResponse {
            token,
            expires_at,
            email: user.email,
            name: user.name,
        })
    }
}
