use crate::dto::{ReservationDto, ReservationStatus};
use crate::utils::coercion::{to_decimal_or_zero, to_int_or_null, to_optional_string, to_trimmed_string};
use crate::utils::{FieldAliases, Record};

use super::{now_iso, FromRecord};

pub mod aliases {
    use crate::utils::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new("id", &["IdReserva", "idReserva", "id_reserva"]);
    pub const USUARIO: FieldAliases = FieldAliases::new("id_usuario", &["IdUsuario", "idUsuario", "id_usuario"]);
    pub const VEHICULO: FieldAliases =
        FieldAliases::new("id_vehiculo", &["IdVehiculo", "idVehiculo", "id_vehiculo"]);
    pub const NOMBRE_USUARIO: FieldAliases =
        FieldAliases::new("nombre_usuario", &["NombreUsuario", "nombreUsuario"]);
    pub const CORREO_USUARIO: FieldAliases =
        FieldAliases::new("correo_usuario", &["CorreoUsuario", "correoUsuario"]);
    pub const VEHICULO_NOMBRE: FieldAliases =
        FieldAliases::new("vehiculo_nombre", &["VehiculoNombre", "vehiculoNombre"]);
    pub const VEHICULO_MATRICULA: FieldAliases =
        FieldAliases::new("vehiculo_matricula", &["VehiculoMatricula", "vehiculoMatricula"]);
    pub const CATEGORIA_NOMBRE: FieldAliases =
        FieldAliases::new("categoria_nombre", &["CategoriaNombre", "categoriaNombre"]);
    pub const TRANSMISION_NOMBRE: FieldAliases =
        FieldAliases::new("transmision_nombre", &["TransmisionNombre", "transmisionNombre"]);
    pub const FECHA_INICIO: FieldAliases =
        FieldAliases::new("fecha_inicio", &["FechaInicio", "fechaInicio", "fecha_inicio"]);
    pub const FECHA_FIN: FieldAliases = FieldAliases::new("fecha_fin", &["FechaFin", "fechaFin", "fecha_fin"]);
    pub const FECHA_RESERVA: FieldAliases =
        FieldAliases::new("fecha_reserva", &["FechaReserva", "fechaReserva", "fecha_reserva"]);
    pub const TOTAL: FieldAliases = FieldAliases::new("total", &["Total", "total"]);
    pub const ESTADO: FieldAliases = FieldAliases::new("estado", &["Estado", "estado"]);
    pub const OBSERVACIONES: FieldAliases =
        FieldAliases::new("observaciones", &["Observaciones", "observaciones"]);
}

impl FromRecord for ReservationDto {
    fn from_record(record: &Record, route_id: Option<i64>) -> Self {
        let text = |field: FieldAliases| to_trimmed_string(field.resolve(record));

        let id_reserva = route_id
            .or_else(|| to_int_or_null(aliases::ID.resolve(record)))
            .unwrap_or(0);

        Self {
            id_reserva,
            id_usuario: to_int_or_null(aliases::USUARIO.resolve(record)),
            id_vehiculo: to_int_or_null(aliases::VEHICULO.resolve(record)),
            nombre_usuario: text(aliases::NOMBRE_USUARIO),
            correo_usuario: text(aliases::CORREO_USUARIO),
            vehiculo_nombre: text(aliases::VEHICULO_NOMBRE),
            vehiculo_matricula: text(aliases::VEHICULO_MATRICULA),
            categoria_nombre: text(aliases::CATEGORIA_NOMBRE),
            transmision_nombre: text(aliases::TRANSMISION_NOMBRE),
            fecha_inicio: text(aliases::FECHA_INICIO),
            fecha_fin: text(aliases::FECHA_FIN),
            fecha_reserva: to_optional_string(aliases::FECHA_RESERVA.resolve(record)).unwrap_or_else(now_iso),
            total: to_decimal_or_zero(aliases::TOTAL.resolve(record)),
            estado: ReservationStatus::normalize(&text(aliases::ESTADO)),
            observaciones: text(aliases::OBSERVACIONES),
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
    fn test_defaults_for_create() {
        let record = record_from_value(&json!({
            "idUsuario": "4",
            "idVehiculo": "9",
            "fechaInicio": "2024-05-01",
            "fechaFin": "2024-05-05",
            "total": "180"
        }));
        let dto = ReservationDto::from_record(&record, None);
        assert_eq!(dto.id_reserva, 0);
        assert_eq!(dto.id_usuario, Some(4));
        assert_eq!(dto.id_vehiculo, Some(9));
        assert_eq!(dto.estado, "Pendiente");
        assert_eq!(dto.total, Decimal::from(180));
        assert!(chrono::DateTime::parse_from_rfc3339(&dto.fecha_reserva).is_ok());
    }

    #[test]
    fn test_client_timestamp_is_kept_when_present() {
        let record = record_from_value(&json!({ "FechaReserva": "2024-04-30T10:00:00.000Z" }));
        let dto = ReservationDto::from_record(&record, Some(5));
        assert_eq!(dto.fecha_reserva, "2024-04-30T10:00:00.000Z");
        assert_eq!(dto.id_reserva, 5);
    }

    #[test]
    fn test_status_is_normalized() {
        for raw in ["confirmada", "CONFIRMADA", "Confirmada"] {
            let record = record_from_value(&json!({ "estado": raw }));
            assert_eq!(ReservationDto::from_record(&record, None).estado, "Confirmada");
        }
        let record = record_from_value(&json!({ "Estado": "pagada" }));
        assert_eq!(ReservationDto::from_record(&record, None).estado, "pagada");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let record = record_from_value(&json!({
            "IdUsuario": 2, "IdVehiculo": 3, "NombreUsuario": "Ana Pérez",
            "FechaInicio": "2024-05-10", "FechaFin": "2024-05-12",
            "Total": "99.90", "Estado": "cancelada", "Observaciones": "Entrega en aeropuerto"
        }));
        let first = ReservationDto::from_record(&record, None);
        let second =
            ReservationDto::from_record(&record_from_value(&serde_json::to_value(&first).unwrap()), None);
        assert_eq!(first, second);
    }
}
