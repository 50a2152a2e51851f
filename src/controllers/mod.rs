//! Controllers del sistema
//!
//! Los controllers concentran la lógica de negocio de cada recurso:
//! validan, aplican las reglas del ciclo de vida y delegan en los
//! repositorios. Las rutas solo los construyen y los invocan.

pub mod auth_controller;
pub mod booking_controller;
pub mod contact_controller;
pub mod dashboard_controller;
pub mod quote_controller;
pub mod testimonial_controller;
pub mod upload_controller;
pub mod vehicle_controller;
