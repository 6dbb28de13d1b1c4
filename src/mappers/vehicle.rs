use crate::dto::{VehicleDto, VehicleStatus};
use crate::utils::coercion::{to_decimal_or_zero, to_int_or_null, to_optional_string, to_trimmed_string};
use crate::utils::{FieldAliases, Record};

use super::FromRecord;

/// Tabla de alias del vehículo, en orden de prioridad
pub mod aliases {
    use crate::utils::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new("id", &["IdVehiculo", "idVehiculo", "id_vehiculo"]);
    pub const MARCA: FieldAliases = FieldAliases::new("marca", &["Marca", "marca"]);
    pub const MODELO: FieldAliases = FieldAliases::new("modelo", &["Modelo", "modelo"]);
    pub const ANIO: FieldAliases = FieldAliases::new("anio", &["Anio", "anio"]);
    pub const CATEGORIA: FieldAliases =
        FieldAliases::new("id_categoria", &["IdCategoria", "idCategoria", "id_categoria"]);
    pub const TRANSMISION: FieldAliases =
        FieldAliases::new("id_transmision", &["IdTransmision", "idTransmision", "id_transmision"]);
    pub const CAPACIDAD: FieldAliases = FieldAliases::new("capacidad", &["Capacidad", "capacidad"]);
    pub const PRECIO_DIA: FieldAliases =
        FieldAliases::new("precio_dia", &["PrecioDia", "precioDia", "precio_dia", "precio"]);
    pub const MATRICULA: FieldAliases = FieldAliases::new("matricula", &["Matricula", "matricula"]);
    pub const PROMOCION: FieldAliases =
        FieldAliases::new("id_promocion", &["IdPromocion", "idPromocion", "id_promocion"]);
    pub const ESTADO: FieldAliases = FieldAliases::new("estado", &["Estado", "estado"]);
    pub const DESCRIPCION: FieldAliases = FieldAliases::new("descripcion", &["Descripcion", "descripcion"]);
    pub const SUCURSAL: FieldAliases =
        FieldAliases::new("id_sucursal", &["IdSucursal", "idSucursal", "id_sucursal"]);
    pub const URL_IMAGEN: FieldAliases =
        FieldAliases::new("url_imagen", &["UrlImagen", "urlImagen", "imagenUrl", "ImagenUrl"]);
}

fn int(record: &Record, field: FieldAliases) -> Option<i64> {
    to_int_or_null(field.resolve(record))
}

impl FromRecord for VehicleDto {
    fn from_record(record: &Record, route_id: Option<i64>) -> Self {
        let precio_dia = to_decimal_or_zero(aliases::PRECIO_DIA.resolve(record));
        let estado = to_trimmed_string(aliases::ESTADO.resolve(record));

        Self {
            id_vehiculo: route_id.or_else(|| int(record, aliases::ID)),
            marca: to_trimmed_string(aliases::MARCA.resolve(record)),
            modelo: to_trimmed_string(aliases::MODELO.resolve(record)),
            anio: int(record, aliases::ANIO),
            id_categoria: int(record, aliases::CATEGORIA),
            id_transmision: int(record, aliases::TRANSMISION),
            capacidad: int(record, aliases::CAPACIDAD),
            precio_dia,
            precio_normal: precio_dia,
            precio_actual: precio_dia,
            matricula: to_optional_string(aliases::MATRICULA.resolve(record)),
            id_promocion: int(record, aliases::PROMOCION),
            estado: if estado.is_empty() {
                VehicleStatus::default().as_str().to_string()
            } else {
                estado
            },
            descripcion: to_trimmed_string(aliases::DESCRIPCION.resolve(record)),
            id_sucursal: int(record, aliases::SUCURSAL),
            url_imagen: to_optional_string(aliases::URL_IMAGEN.resolve(record)),
        }
    }
}
