//! Normalización de respuestas de la API de gestión
//!
//! La API remota no garantiza la forma del sobre: a veces devuelve un arreglo
//! desnudo, a veces `{ "data": [...] }` y a veces el arreglo bajo una
//! propiedad con el nombre de la entidad. Este módulo lo reduce todo a una
//! lista o registro canónico y nunca falla: un sobre desconocido es una
//! lista vacía.

pub mod envelope;
pub mod invoices;
pub mod reference;
pub mod users;

pub use envelope::{classify, normalize_list, normalize_record, Envelope, Resource};
pub use invoices::{decorate_invoices, reservation_labels};
pub use reference::{derive_categories, fallback_transmissions, normalize_categories, normalize_transmissions};
pub use users::{normalize_user, normalize_users};

use serde_json::Value;

use crate::mappers::FromRecord;
use crate::utils::fields::record_from_value;

/// Normaliza la lista y mapea cada elemento al DTO canónico
pub fn normalize_entities<T: FromRecord>(payload: &Value, resource: Resource) -> Vec<T> {
    normalize_list(payload, resource)
        .iter()
        .map(|item| T::from_record(&record_from_value(item), None))
        .collect()
}

/// Registro único mapeado al DTO; el id de la ruta gana sobre el del cuerpo
pub fn normalize_entity<T: FromRecord>(payload: &Value, route_id: Option<i64>) -> Option<T> {
    normalize_record(payload).map(|record| T::from_record(&record_from_value(&record), route_id))
}
