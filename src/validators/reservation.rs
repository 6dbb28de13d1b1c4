use crate::dto::{ReservationDto, ReservationStatus};
use crate::utils::validation::validate_positive;

use super::{ViolationList, Violations};

pub const MSG_USUARIO: &str = "El IdUsuario es obligatorio.";
pub const MSG_VEHICULO: &str = "El IdVehiculo es obligatorio.";
pub const MSG_FECHA_INICIO: &str = "La fecha de inicio es obligatoria.";
pub const MSG_FECHA_FIN: &str = "La fecha de fin es obligatoria.";
pub const MSG_FECHAS: &str = "La fecha de fin no puede ser menor que la fecha de inicio.";
pub const MSG_TOTAL: &str = "El total debe ser mayor que 0.";
pub const MSG_ESTADO: &str = "El estado debe ser Pendiente, Confirmada o Cancelada.";

impl Violations for ReservationDto {
    fn violations(&self) -> Vec<String> {
        let mut errors = ViolationList::new();

        errors.push_if(!matches!(self.id_usuario, Some(id) if id > 0), MSG_USUARIO);
        errors.push_if(!matches!(self.id_vehiculo, Some(id) if id > 0), MSG_VEHICULO);
        errors.push_if(self.fecha_inicio.is_empty(), MSG_FECHA_INICIO);
        errors.push_if(self.fecha_fin.is_empty(), MSG_FECHA_FIN);

        // fechas ISO: el orden lexicográfico coincide con el cronológico
        if !self.fecha_inicio.is_empty() && !self.fecha_fin.is_empty() {
            errors.push_if(self.fecha_fin < self.fecha_inicio, MSG_FECHAS);
        }

        errors.check(validate_positive(self.total), MSG_TOTAL);
        errors.push_if(ReservationStatus::parse(&self.estado).is_none(), MSG_ESTADO);

        errors.into_vec()
    }
}
