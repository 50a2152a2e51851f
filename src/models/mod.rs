//! Modelos del sistema
//!
//! Este módulo contiene las formas públicas de las entidades (snake_case,
//! enumerados legibles) tal y como viajan por la API. Las formas nativas
//! del almacén viven en los repositorios.

pub mod auth;
pub mod booking;
pub mod quote;
pub mod service;
pub mod testimonial;
pub mod vehicle;
