//! Utilidades del sistema
//!
//! Este módulo contiene la resolución de campos con alias, la conversión de
//! tipos, las reglas de validación atómicas, el manejo de errores y JWT.

pub mod coercion;
pub mod errors;
pub mod fields;
pub mod jwt;
pub mod validation;

pub use fields::{FieldAliases, Record};
