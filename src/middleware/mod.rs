//! Middleware del sistema
//!
//! Este módulo contiene el middleware de autenticación del panel y CORS.

pub mod auth;
pub mod cors;

pub use auth::require_admin;
pub use cors::*;
