//! Controller del formulario de contacto
//!
//! Los mensajes de contacto no tienen ciclo de vida: se validan, se
//! registran en el log estructurado y se notifica al staff. No se
//! persisten en el almacén.

use tracing::info;
use validator::Validate;

use crate::dto::common::SubmissionResponse;
use crate::dto::contact_dto::ContactMessageRequest;
use crate::services::notification_service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ContactController {
    notifications: NotificationService,
}

impl ContactController {
    pub fn new(state: &AppState) -> Self {
        Self {
            notifications: NotificationService::new(
                state.http_client.clone(),
                state.config.clone(),
            ),
        }
    }

    pub async fn submit(
        &self,
        request: ContactMessageRequest,
    ) -> Result<SubmissionResponse, AppError> {
        request.validate()?;

        info!(
            name = %request.name,
            email = %request.email,
            "📬 Mensaje de contacto recibido"
        );
        self.notifications.spawn_contact_notification(&request);

        Ok(SubmissionResponse::received(
            "Thanks for reaching out! We will get back to you shortly.",
        ))
    }
}
