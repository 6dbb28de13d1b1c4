use serde::{Deserialize, Serialize};

/// Categoría de vehículo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    pub id_categoria: i64,
    pub nombre: String,
}

/// Opción de transmisión para los formularios (`MT`, `AT`, `CVT`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionOption {
    pub codigo: String,
    pub nombre: String,
}

impl TransmissionOption {
    pub fn new(codigo: &str, nombre: &str) -> Self {
        Self {
            codigo: codigo.to_string(),
            nombre: nombre.to_string(),
        }
    }
}
