//! UrbanDrive - panel de administración
//!
//! Servidor web delgado frente a la API REST de gestión: valida formularios,
//! normaliza las respuestas de la API y expone las vistas del panel y el
//! registro público de clientes.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod mappers;
pub mod middleware;
pub mod normalizers;
pub mod routes;
pub mod state;
pub mod utils;
pub mod validators;

pub use routes::create_router;
pub use state::AppState;
