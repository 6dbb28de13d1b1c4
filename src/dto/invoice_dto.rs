use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Factura canónica asociada a una reserva
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceDto {
    pub id_factura: i64,
    pub id_reserva: Option<i64>,
    pub uri_factura: String,
    pub fecha_emision: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub valor_total: Decimal,
}
