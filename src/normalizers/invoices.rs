//! Etiquetas legibles de la reserva asociada a cada factura.

use std::collections::HashMap;

use serde_json::Value;

use crate::mappers::invoice::aliases as invoice;
use crate::mappers::reservation::aliases as reservation;
use crate::utils::coercion::{to_int_or_null, to_trimmed_string};

pub const TEXTO_RESERVA: &str = "TextoReserva";

/// `#id - nombre - vehículo - (aaaa-mm-dd)` por id de reserva; las partes
/// vacías se omiten.
pub fn reservation_labels(reservations: &[Value]) -> HashMap<i64, String> {
    reservations
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|record| {
            let id = to_int_or_null(reservation::ID.resolve(record)).filter(|id| *id != 0)?;

            let fecha: String = to_trimmed_string(reservation::FECHA_INICIO.resolve(record))
                .chars()
                .take(10)
                .collect();

            let mut parts = vec![
                to_trimmed_string(reservation::NOMBRE_USUARIO.resolve(record)),
                to_trimmed_string(reservation::VEHICULO_NOMBRE.resolve(record)),
            ];
            if !fecha.is_empty() {
                parts.push(format!("({})", fecha));
            }
            parts.retain(|part| !part.is_empty());

            let mut label = format!("#{}", id);
            if !parts.is_empty() {
                label.push_str(" - ");
                label.push_str(&parts.join(" - "));
            }
            Some((id, label))
        })
        .collect()
}

/// Agrega `TextoReserva` a cada factura. Reserva desconocida → `#id`;
/// factura sin reserva → `-`.
pub fn decorate_invoices(invoices: Vec<Value>, reservations: &[Value]) -> Vec<Value> {
    let labels = reservation_labels(reservations);

    invoices
        .into_iter()
        .map(|mut item| {
            if let Some(record) = item.as_object_mut() {
                let texto = match to_int_or_null(invoice::RESERVA.resolve(record)).filter(|id| *id != 0) {
                    Some(id) => labels.get(&id).cloned().unwrap_or_else(|| format!("#{}", id)),
                    None => "-".to_string(),
                };
                record.insert(TEXTO_RESERVA.to_string(), Value::String(texto));
            }
            item
        })
        .collect()
}
