//! Controller de autenticación
//!
//! Login de usuarios administrativos. La verificación de credenciales y
//! la emisión del token viven en AuthService.

use validator::Validate;

use crate::models::auth::{LoginRequest, LoginResponse};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: AuthService,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: AuthService::new(state.pool.clone(), state.config.clone()),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;
        self.service.login(&request).await
    }
}
