//! Controller del dashboard administrativo
//!
//! Agregados de la portada del back office: conteos por estado del
//! pipeline de quotes, reservas abiertas e ingresos del mes.

use crate::dto::dashboard_dto::DashboardStats;
use crate::middleware::auth::{require_admin, AuthenticatedAdmin};
use crate::models::booking::Booking;
use crate::models::quote::{Quote, QuoteStatus};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::quote_repository::QuoteRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Cuántas filas recientes alimentan los paneles laterales
const RECENT_LIMIT: i64 = 5;

pub struct DashboardController {
    quotes: QuoteRepository,
    bookings: BookingRepository,
}

impl DashboardController {
    pub fn new(state: &AppState) -> Self {
        Self {
            quotes: QuoteRepository::new(state.pool.clone()),
            bookings: BookingRepository::new(state.pool.clone()),
        }
    }

    pub async fn stats(&self, admin: &AuthenticatedAdmin) -> Result<DashboardStats, AppError> {
        require_admin(admin)?;

        Ok(DashboardStats {
            new_quotes: self.quotes.count_by_status(QuoteStatus::New).await?,
            pending_response: self.quotes.count_by_status(QuoteStatus::Contacted).await?,
            quoted: self.quotes.count_by_status(QuoteStatus::Quoted).await?,
            booked: self.quotes.count_by_status(QuoteStatus::Booked).await?,
            upcoming_bookings: self.bookings.count_open().await?,
            monthly_revenue: self.bookings.monthly_revenue().await?,
        })
    }

    pub async fn recent_quotes(
        &self,
        admin: &AuthenticatedAdmin,
    ) -> Result<Vec<Quote>, AppError> {
        require_admin(admin)?;
        self.quotes.recent(RECENT_LIMIT).await
    }

    pub async fn upcoming_bookings(
        &self,
        admin: &AuthenticatedAdmin,
    ) -> Result<Vec<Booking>, AppError> {
        require_admin(admin)?;
        self.bookings.upcoming(RECENT_LIMIT).await
    }
}
