//! Servicio de reservas de American Royalty Las Vegas
//!
//! Backend del sitio de alquiler de limusinas: formularios públicos de
//! presupuesto y contacto, catálogo de flota con fallback a fixtures y
//! API administrativa del ciclo de vida Quote → Booking.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
