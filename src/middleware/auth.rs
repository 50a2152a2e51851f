//! Middleware de autenticación JWT
//!
//! Este módulo maneja la emisión y verificación de tokens JWT y el
//! guard de las rutas administrativas. El guard es puro: decide solo
//! con los claims del token, sin tocar el almacén.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EnvironmentConfig;
use crate::models::auth::{AdminUser, ADMIN_ROLE};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

/// Identidad autenticada que se inyecta en los handlers admin
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub user_id: Uuid,
    pub email: String,
    pub role: String,
}

/// Emite un token firmado para un usuario administrativo
pub fn generate_jwt_token(
    user: &AdminUser,
    config: &EnvironmentConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::seconds(config.jwt_expiration as i64);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.clone(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error signing token: {}", e)))?;

    Ok((token, expires_at))
}

/// Verifica un token Bearer y devuelve la identidad que transporta
pub fn verify_jwt_token(
    token: &str,
    config: &EnvironmentConfig,
) -> Result<AuthenticatedAdmin, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    let claims = token_data.claims;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    Ok(AuthenticatedAdmin {
        user_id,
        email: claims.email,
        role: claims.role,
    })
}

/// Guard de rol: Forbidden cuando la identidad no es administrativa.
/// Los controllers admin lo llaman antes de cualquier otra cosa.
pub fn require_admin(admin: &AuthenticatedAdmin) -> Result<(), AppError> {
    if admin.role != ADMIN_ROLE {
        return Err(AppError::Forbidden(
            "Administrator permissions required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

        verify_jwt_token(token, &state.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec!["*".to_string()],
            notify_api_key: None,
            notify_api_url: "https://api.resend.com/emails".to_string(),
            notify_from: "from@example.com".to_string(),
            notify_to: "to@example.com".to_string(),
            upload_dir: "uploads".to_string(),
        }
    }

    fn admin_user() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            email: "admin@americanroyaltylv.com".to_string(),
            name: "Admin".to_string(),
            hashed_password: "irrelevant".to_string(),
            role: ADMIN_ROLE.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let user = admin_user();

        let (token, expires_at) = generate_jwt_token(&user, &config).unwrap();
        assert!(expires_at > Utc::now());

        let identity = verify_jwt_token(&token, &config).unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.email, user.email);
        assert_eq!(identity.role, ADMIN_ROLE);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let config = test_config();
        let (token, _) = generate_jwt_token(&admin_user(), &config).unwrap();

        let mut other = test_config();
        other.jwt_secret = "another-secret".to_string();

        assert!(matches!(
            verify_jwt_token(&token, &other),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            verify_jwt_token("not-a-jwt", &test_config()),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_require_admin_checks_role() {
        let admin = AuthenticatedAdmin {
            user_id: Uuid::new_v4(),
            email: "admin@americanroyaltylv.com".to_string(),
            role: ADMIN_ROLE.to_string(),
        };
        assert!(require_admin(&admin).is_ok());

        let viewer = AuthenticatedAdmin {
            role: "VIEWER".to_string(),
            ..admin
        };
        assert!(matches!(
            require_admin(&viewer),
            Err(AppError::Forbidden(_))
        ));
    }
}
