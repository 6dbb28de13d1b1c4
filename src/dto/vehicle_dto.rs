use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estado del vehículo tal como lo maneja la API de gestión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Disponible,
    Mantenimiento,
    Inactivo,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Disponible,
        VehicleStatus::Mantenimiento,
        VehicleStatus::Inactivo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Disponible => "Disponible",
            VehicleStatus::Mantenimiento => "Mantenimiento",
            VehicleStatus::Inactivo => "Inactivo",
        }
    }

    /// Coincidencia exacta con el valor canónico
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Disponible
    }
}

/// Vehículo canónico enviado a la API de gestión.
///
/// `PrecioNormal` y `PrecioActual` replican `PrecioDia` al crear o editar:
/// esta capa no tiene lógica de descuentos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_vehiculo: Option<i64>,
    pub marca: String,
    pub modelo: String,
    pub anio: Option<i64>,
    pub id_categoria: Option<i64>,
    pub id_transmision: Option<i64>,
    pub capacidad: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio_dia: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio_normal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio_actual: Decimal,
    pub matricula: Option<String>,
    pub id_promocion: Option<i64>,
    pub estado: String,
    pub descripcion: String,
    pub id_sucursal: Option<i64>,
    pub url_imagen: Option<String>,
}
