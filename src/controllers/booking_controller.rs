//! Controller de Bookings
//!
//! Gestión administrativa de reservas: listado, creación directa por el
//! staff y cambio de estado. Las reservas nacidas de una Quote llegan
//! aquí ya creadas por el Conversion Workflow.

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::models::booking::{Booking, BookingStatus, NewBooking};
use crate::repositories::booking_repository::BookingRepository;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct BookingController {
    bookings: BookingRepository,
}

impl BookingController {
    pub fn new(state: &AppState) -> Self {
        Self {
            bookings: BookingRepository::new(state.pool.clone()),
        }
    }

    /// Tabla y calendario del back office, por fecha ascendente
    pub async fn list(&self, admin: &AuthenticatedAdmin) -> Result<Vec<Booking>, AppError> {
        require_admin(admin)?;
        self.bookings.list().await
    }

    /// Creación directa (walk-in o teléfono, sin Quote origen).
    ///
    /// Invariantes financieras: el total cubre el depósito cuando ambos
    /// existen, y marcar el depósito como pagado exige un importe.
    pub async fn create(
        &self,
        admin: &AuthenticatedAdmin,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        require_admin(admin)?;
        request.validate()?;

        let booking_date = validate_date(&request.booking_date)
            .map_err(|_| validation_error("booking_date", "must be a valid YYYY-MM-DD date"))?;

        if let (Some(total), Some(deposit)) = (request.total_amount, request.deposit_amount) {
            if total < deposit {
                return Err(AppError::BadRequest(
                    "total_amount cannot be lower than deposit_amount".to_string(),
                ));
            }
        }
        if request.deposit_paid && request.deposit_amount.is_none() {
            return Err(AppError::BadRequest(
                "deposit_paid requires a deposit_amount".to_string(),
            ));
        }

        let new_booking = NewBooking {
            quote_id: request.quote_id,
            client_name: request.client_name,
            client_email: request.client_email,
            client_phone: request.client_phone,
            event_type: request.event_type,
            vehicle_id: request.vehicle_id,
            booking_date,
            start_time: request.start_time,
            end_time: request.end_time,
            duration_hours: request.duration_hours,
            pickup_location: request.pickup_location,
            dropoff_location: request.dropoff_location,
            guest_count: request.guest_count,
            total_amount: request.total_amount,
            deposit_amount: request.deposit_amount,
            deposit_paid: request.deposit_paid,
            status: request.status.unwrap_or(BookingStatus::Pending),
            notes: request.notes,
        };

        let booking = self.bookings.create(&new_booking).await?;
        info!("🚐 Reserva creada por el staff: {} ({})", booking.client_name, booking.id);

        Ok(ApiResponse::success_with_message(
            booking,
            "Booking created successfully".to_string(),
        ))
    }

    /// Cambio de estado. Sin tabla de transiciones: el staff corrige
    /// estados libremente (incluida la reapertura de una cancelada).
    pub async fn update_status(
        &self,
        admin: &AuthenticatedAdmin,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        require_admin(admin)?;

        let booking = self.bookings.update_status(id, request.status).await?;
        info!(
            "🚐 Booking {} ahora en estado {}",
            booking.id,
            booking.status.label()
        );

        Ok(ApiResponse::success_with_message(
            booking,
            "Booking status updated".to_string(),
        ))
    }
}
