//! DTOs del dashboard administrativo

use rust_decimal::Decimal;
use serde::Serialize;

/// Agregados que alimentan la portada del back office
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub new_quotes: i64,
    pub pending_response: i64,
    pub quoted: i64,
    pub booked: i64,
    pub upcoming_bookings: i64,
    pub monthly_revenue: Decimal,
}
