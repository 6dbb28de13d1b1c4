use crate::dto::InvoiceDto;
use crate::utils::coercion::{to_decimal_or_zero, to_int_or_null, to_optional_string, to_trimmed_string};
use crate::utils::Record;

use super::{now_iso, FromRecord};

pub mod aliases {
    use crate::utils::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new("id", &["IdFactura", "idFactura", "id_factura"]);
    pub const RESERVA: FieldAliases = FieldAliases::new("id_reserva", &["IdReserva", "idReserva", "id_reserva"]);
    pub const URI: FieldAliases = FieldAliases::new("uri_factura", &["UriFactura", "uriFactura", "uri_factura"]);
    pub const FECHA_EMISION: FieldAliases =
        FieldAliases::new("fecha_emision", &["FechaEmision", "fechaEmision", "fecha_emision"]);
    pub const VALOR_TOTAL: FieldAliases =
        FieldAliases::new("valor_total", &["ValorTotal", "valorTotal", "valor_total"]);
}

impl FromRecord for InvoiceDto {
    fn from_record(record: &Record, route_id: Option<i64>) -> Self {
        Self {
            id_factura: route_id
                .or_else(|| to_int_or_null(aliases::ID.resolve(record)))
                .unwrap_or(0),
            id_reserva: to_int_or_null(aliases::RESERVA.resolve(record)),
            uri_factura: to_trimmed_string(aliases::URI.resolve(record)),
            // la fecha de emisión se fija en el servidor si no llega
            fecha_emision: to_optional_string(aliases::FECHA_EMISION.resolve(record))
                .unwrap_or_else(now_iso),
            valor_total: to_decimal_or_zero(aliases::VALOR_TOTAL.resolve(record)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fields::record_from_value;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_maps_invoice() {
        let record = record_from_value(&json!({
            "idReserva": "15",
            "uriFactura": " https://facturas.urbandrive.ec/15.pdf ",
            "valorTotal": "250.75"
        }));
        let dto = InvoiceDto::from_record(&record, None);
        assert_eq!(dto.id_factura, 0);
        assert_eq!(dto.id_reserva, Some(15));
        assert_eq!(dto.uri_factura, "https://facturas.urbandrive.ec/15.pdf");
        assert_eq!(dto.valor_total, Decimal::new(25075, 2));
        assert!(!dto.fecha_emision.is_empty());
    }

    #[test]
    fn test_route_id_and_explicit_date() {
        let record = record_from_value(&json!({ "IdFactura": "3", "FechaEmision": "2024-06-01T00:00:00Z" }));
        let dto = InvoiceDto::from_record(&record, Some(11));
        assert_eq!(dto.id_factura, 11);
        assert_eq!(dto.fecha_emision, "2024-06-01T00:00:00Z");
        assert_eq!(InvoiceDto::from_record(&record, None).id_factura, 3);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let record = record_from_value(&json!({ "IdReserva": 4, "UriFactura": "u", "ValorTotal": 10 }));
        let first = InvoiceDto::from_record(&record, None);
        let second = InvoiceDto::from_record(&record_from_value(&serde_json::to_value(&first).unwrap()), None);
        assert_eq!(first, second);
    }
}
