//! Utilidades compartidas
//!
//! Este módulo contiene helpers de errores y validación usados
//! por toda la aplicación.

pub mod errors;
pub mod validation;
