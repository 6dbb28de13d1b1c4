use serde::{Deserialize, Serialize};

/// Rol del usuario en la API de gestión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Cliente,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Cliente, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cliente => "Cliente",
            Role::Admin => "Admin",
        }
    }

    /// Compara contra la entrada en mayúsculas
    pub fn normalize(value: &str) -> Option<Self> {
        let upper = value.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().to_uppercase() == upper)
    }
}

/// Tipo de documento de identificación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentificationType {
    Ci,
    Pasaporte,
    Licencia,
}

impl IdentificationType {
    pub const ALL: [IdentificationType; 3] = [
        IdentificationType::Ci,
        IdentificationType::Pasaporte,
        IdentificationType::Licencia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentificationType::Ci => "CI",
            IdentificationType::Pasaporte => "PASAPORTE",
            IdentificationType::Licencia => "LICENCIA",
        }
    }

    /// Busca el tipo por su valor en mayúsculas
    pub fn from_normalized(value: &str) -> Option<Self> {
        let upper = value.trim().to_uppercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == upper)
    }
}

/// Usuario canónico. La contraseña viaja en texto plano: la API de gestión
/// es quien la almacena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub contrasena: String,
    pub direccion: String,
    pub pais: String,
    pub edad: Option<i64>,
    pub tipo_identificacion: String,
    pub identificacion: String,
    pub rol: String,
}

/// Usuario tal como sale hacia el navegador: nunca incluye la contraseña
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_usuario: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub direccion: String,
    pub pais: String,
    pub edad: Option<i64>,
    pub tipo_identificacion: String,
    pub identificacion: String,
    pub rol: String,
}

impl From<UserDto> for UserSummary {
    fn from(user: UserDto) -> Self {
        Self {
            id_usuario: user.id_usuario,
            nombre: user.nombre,
            apellido: user.apellido,
            email: user.email,
            direccion: user.direccion,
            pais: user.pais,
            edad: user.edad,
            tipo_identificacion: user.tipo_identificacion,
            identificacion: user.identificacion,
            rol: user.rol,
        }
    }
}
