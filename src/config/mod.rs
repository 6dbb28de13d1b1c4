//! Configuración del proyecto
//!
//! Variables de entorno del servidor y de la API de gestión remota.

pub mod environment;

pub use environment::*;
