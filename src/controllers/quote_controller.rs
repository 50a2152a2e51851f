//! Controller de Quotes
//!
//! Entrada pública de solicitudes de presupuesto y gestión administrativa
//! del ciclo de vida, incluidas las quick actions y la conversión a
//! Booking.

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, SubmissionResponse};
use crate::dto::quote_dto::{SubmitQuoteRequest, UpdateQuoteRequest};
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::models::booking::Booking;
use crate::models::quote::{NewQuote, Quote, QuoteStatus};
use crate::repositories::quote_repository::QuoteRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::notification_service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::{invalid_transition_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct QuoteController {
    quotes: QuoteRepository,
    vehicles: VehicleRepository,
    notifications: NotificationService,
}

impl QuoteController {
    pub fn new(state: &AppState) -> Self {
        Self {
            quotes: QuoteRepository::new(state.pool.clone()),
            vehicles: VehicleRepository::new(state.pool.clone()),
            notifications: NotificationService::new(
                state.http_client.clone(),
                state.config.clone(),
            ),
        }
    }

    /// Alta pública de una solicitud. Siempre entra como `new`; un slug
    /// de vehículo desconocido se persiste como null, nunca rechaza.
    pub async fn submit(
        &self,
        request: SubmitQuoteRequest,
    ) -> Result<SubmissionResponse, AppError> {
        request.validate()?;

        let event_date = validate_date(&request.event_date)
            .map_err(|_| validation_error("event_date", "must be a valid YYYY-MM-DD date"))?;

        let preferred_vehicle_id = match &request.preferred_vehicle {
            Some(slug) => self.vehicles.resolve_slug(slug).await,
            None => None,
        };

        let new_quote = NewQuote {
            name: request.name,
            email: request.email,
            phone: request.phone,
            event_type: request.event_type,
            preferred_vehicle_id,
            event_date,
            pickup_time: request.pickup_time,
            guest_count: request.guest_count,
            duration_hours: request.duration_hours,
            pickup_location: request.pickup_location,
            dropoff_location: request.dropoff_location,
            details: request.details,
        };

        let quote = self.quotes.create(&new_quote).await?;
        info!("📝 Nueva solicitud de presupuesto: {} ({})", quote.name, quote.id);

        self.notifications.spawn_quote_notification(&quote);

        Ok(SubmissionResponse::received(
            "Thank you! We received your quote request and will reach out shortly.",
        ))
    }

    /// Bandeja administrativa, más recientes primero
    pub async fn list(&self, admin: &AuthenticatedAdmin) -> Result<Vec<Quote>, AppError> {
        require_admin(admin)?;
        self.quotes.list().await
    }

    pub async fn get_by_id(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
    ) -> Result<Quote, AppError> {
        require_admin(admin)?;
        self.quotes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))
    }

    /// Patch administrativo. La transición de estado se valida contra la
    /// tabla del ciclo de vida salvo que el patch traiga `force`.
    pub async fn update(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
        patch: UpdateQuoteRequest,
    ) -> Result<ApiResponse<Quote>, AppError> {
        require_admin(admin)?;

        let current = self
            .quotes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Quote", &id.to_string()))?;

        if let Some(to) = patch.status {
            if !patch.force && !current.status.can_transition(to) {
                return Err(invalid_transition_error(
                    "Quote",
                    current.status.label(),
                    to.label(),
                ));
            }
            if patch.force && !current.status.can_transition(to) {
                info!(
                    "⚠️ Override de staff en quote {}: {} -> {}",
                    id,
                    current.status.label(),
                    to.label()
                );
            }
        }

        let updated = self.quotes.update(id, &patch).await?;
        Ok(ApiResponse::success_with_message(
            updated,
            "Quote updated successfully".to_string(),
        ))
    }

    /// Quick action: marcar como contactada
    pub async fn mark_contacted(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
    ) -> Result<ApiResponse<Quote>, AppError> {
        self.update(
            admin,
            id,
            UpdateQuoteRequest::default().with_status(QuoteStatus::Contacted),
        )
        .await
    }

    /// Quick action: enviar el presupuesto al cliente. Además de fijar
    /// el estado, dispara el email best-effort con el importe.
    pub async fn send_quote(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
        patch: UpdateQuoteRequest,
    ) -> Result<ApiResponse<Quote>, AppError> {
        let response = self
            .update(admin, id, patch.with_status(QuoteStatus::Quoted))
            .await?;

        if let Some(quote) = &response.data {
            self.notifications.spawn_quote_sent_email(quote);
        }

        Ok(response)
    }

    /// Quick action: cancelar la solicitud
    pub async fn cancel(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
    ) -> Result<ApiResponse<Quote>, AppError> {
        self.update(
            admin,
            id,
            UpdateQuoteRequest::default().with_status(QuoteStatus::Cancelled),
        )
        .await
    }

    /// Conversion Workflow: materializa la Quote como Booking en una
    /// transacción. Una segunda conversión concurrente recibe Conflict.
    pub async fn convert_to_booking(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
    ) -> Result<ApiResponse<Booking>, AppError> {
        require_admin(admin)?;

        let (quote, booking) = self.quotes.convert_to_booking(id).await?;
        info!(
            "🎉 Quote {} convertida en booking {} ({})",
            quote.id, booking.id, booking.client_name
        );

        Ok(ApiResponse::success_with_message(
            booking,
            "Quote converted to booking successfully".to_string(),
        ))
    }
}
