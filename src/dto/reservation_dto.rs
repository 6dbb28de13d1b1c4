use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Pendiente,
    Confirmada,
    Cancelada,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Pendiente,
        ReservationStatus::Confirmada,
        ReservationStatus::Cancelada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pendiente => "Pendiente",
            ReservationStatus::Confirmada => "Confirmada",
            ReservationStatus::Cancelada => "Cancelada",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Lleva la entrada a la capitalización canónica comparando en
    /// mayúsculas. Vacío → `Pendiente`; un valor desconocido se deja tal cual
    /// para que la validación lo rechace.
    pub fn normalize(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ReservationStatus::Pendiente.as_str().to_string();
        }
        let upper = trimmed.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().to_uppercase() == upper)
            .map(|status| status.as_str().to_string())
            .unwrap_or_else(|| trimmed.to_string())
    }
}

/// Reserva canónica. Los campos de nombre, correo, matrícula, categoría y
/// transmisión son copias de presentación y no se validan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationDto {
    pub id_reserva: i64,
    pub id_usuario: Option<i64>,
    pub id_vehiculo: Option<i64>,
    pub nombre_usuario: String,
    pub correo_usuario: String,
    pub vehiculo_nombre: String,
    pub vehiculo_matricula: String,
    pub categoria_nombre: String,
    pub transmision_nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    /// Marca de creación; no se muestra al usuario final
    pub fecha_reserva: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub estado: String,
    pub observaciones: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_status() {
        for raw in ["confirmada", "CONFIRMADA", "Confirmada", "  cOnFiRmAdA "] {
            assert_eq!(ReservationStatus::normalize(raw), "Confirmada");
        }
        assert_eq!(ReservationStatus::normalize(""), "Pendiente");
        assert_eq!(ReservationStatus::normalize("   "), "Pendiente");
        assert_eq!(ReservationStatus::normalize("Pagada"), "Pagada");
    }
}
