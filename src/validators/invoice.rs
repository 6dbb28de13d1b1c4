use crate::dto::InvoiceDto;
use crate::utils::validation::{validate_not_empty, validate_positive};

use super::{ViolationList, Violations};

pub const MSG_RESERVA: &str = "La reserva asociada es obligatoria.";
pub const MSG_URI: &str = "El enlace de la factura es obligatorio.";
pub const MSG_FECHA_EMISION: &str = "La fecha de emisión es obligatoria.";
pub const MSG_VALOR_TOTAL: &str = "El valor total debe ser mayor que cero.";

impl Violations for InvoiceDto {
    fn violations(&self) -> Vec<String> {
        let mut errors = ViolationList::new();

        errors.push_if(!matches!(self.id_reserva, Some(id) if id > 0), MSG_RESERVA);
        errors.check(validate_not_empty(&self.uri_factura), MSG_URI);
        errors.check(validate_not_empty(&self.fecha_emision), MSG_FECHA_EMISION);
        errors.check(validate_positive(self.valor_total), MSG_VALOR_TOTAL);

        errors.into_vec()
    }
}
