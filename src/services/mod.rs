//! Services module
//!
//! Este módulo contiene la lógica de negocio que cruza el borde del
//! sistema: autenticación de usuarios administrativos y notificaciones
//! por email hacia el staff.

pub mod auth_service;
pub mod notification_service;

pub use auth_service::*;
pub use notification_service::*;
