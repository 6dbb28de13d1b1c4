use serde::{Deserialize, Serialize};

// Login request (formulario)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub return_url: Option<String>,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub rol: String,
    pub redirect: String,
}

/// Formulario de registro público; todos los campos llegan como texto
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: String,
    pub pais: String,
    pub edad: String,
    pub tipo_identificacion: String,
    pub identificacion: String,
    pub direccion: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirmar_password: String,
}
