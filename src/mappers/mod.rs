//! Mappers de entidades
//!
//! Construyen el DTO canónico a partir de un registro crudo (formulario o
//! payload de la API), combinando la resolución de alias con la conversión
//! de tipos. Nunca fallan: los valores inválidos degradan a `None`, cero o
//! vacío y es el validador quien los reporta.

pub mod invoice;
pub mod reservation;
pub mod user;
pub mod vehicle;

use crate::utils::Record;

/// Construcción de un DTO desde un registro dinámico.
///
/// `route_id` es el identificador recibido fuera del cuerpo (segmento de la
/// ruta); cuando está presente siempre gana sobre el id del cuerpo.
pub trait FromRecord: Sized {
    fn from_record(record: &Record, route_id: Option<i64>) -> Self;
}

/// Marca de tiempo ISO 8601 en UTC con milisegundos
pub(crate) fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
