use crate::dto::auth_dto::RegistrationForm;
use crate::dto::{IdentificationType, Role, UserDto};
use crate::utils::coercion::{to_digits_only_int, to_int_or_null, to_trimmed_string};
use crate::utils::Record;

use super::FromRecord;

/// Tabla de alias del usuario; incluye los plurales del formulario de registro
pub mod aliases {
    use crate::utils::FieldAliases;

    pub const ID: FieldAliases = FieldAliases::new("id", &["IdUsuario", "idUsuario", "id_usuario"]);
    pub const NOMBRE: FieldAliases =
        FieldAliases::new("nombre", &["Nombre", "nombre", "Nombres", "nombres"]);
    pub const APELLIDO: FieldAliases =
        FieldAliases::new("apellido", &["Apellido", "apellido", "Apellidos", "apellidos"]);
    pub const EMAIL: FieldAliases = FieldAliases::new("email", &["Email", "email", "correo"]);
    pub const CONTRASENA: FieldAliases =
        FieldAliases::new("contrasena", &["Contrasena", "contrasena", "password"]);
    pub const DIRECCION: FieldAliases = FieldAliases::new("direccion", &["Direccion", "direccion"]);
    pub const PAIS: FieldAliases = FieldAliases::new("pais", &["Pais", "pais"]);
    pub const EDAD: FieldAliases = FieldAliases::new("edad", &["Edad", "edad"]);
    pub const TIPO_IDENTIFICACION: FieldAliases = FieldAliases::new(
        "tipo_identificacion",
        &["TipoIdentificacion", "tipoIdentificacion", "tipo_identificacion"],
    );
    pub const IDENTIFICACION: FieldAliases =
        FieldAliases::new("identificacion", &["Identificacion", "identificacion"]);
    pub const ROL: FieldAliases = FieldAliases::new("rol", &["Rol", "rol"]);
}

/// Rol canónico; vacío → `Cliente`, desconocido se deja para la validación
fn normalize_role(raw: String) -> String {
    if raw.is_empty() {
        return Role::Cliente.as_str().to_string();
    }
    Role::normalize(&raw)
        .map(|role| role.as_str().to_string())
        .unwrap_or(raw)
}

impl FromRecord for UserDto {
    fn from_record(record: &Record, route_id: Option<i64>) -> Self {
        let text = |field: crate::utils::FieldAliases| to_trimmed_string(field.resolve(record));

        Self {
            id_usuario: route_id.or_else(|| to_int_or_null(aliases::ID.resolve(record))),
            nombre: text(aliases::NOMBRE),
            apellido: text(aliases::APELLIDO),
            email: text(aliases::EMAIL),
            contrasena: text(aliases::CONTRASENA),
            direccion: text(aliases::DIRECCION),
            pais: text(aliases::PAIS),
            edad: to_digits_only_int(aliases::EDAD.resolve(record)),
            tipo_identificacion: text(aliases::TIPO_IDENTIFICACION),
            identificacion: text(aliases::IDENTIFICACION),
            rol: normalize_role(text(aliases::ROL)),
        }
    }
}

/// Usuario enviado a la API desde el registro público; siempre `Cliente`
impl From<&RegistrationForm> for UserDto {
    fn from(form: &RegistrationForm) -> Self {
        let tipo = form.tipo_identificacion.trim();

        Self {
            id_usuario: None,
            nombre: form.nombres.trim().to_string(),
            apellido: form.apellidos.trim().to_string(),
            email: form.email.trim().to_string(),
            contrasena: form.password.clone(),
            direccion: form.direccion.trim().to_string(),
            pais: form.pais.trim().to_string(),
            edad: form.edad.trim().parse().ok(),
            tipo_identificacion: IdentificationType::from_normalized(tipo)
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_else(|| tipo.to_string()),
            identificacion: form.identificacion.trim().to_string(),
            rol: Role::Cliente.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fields::record_from_value;
    use serde_json::json;

    #[test]
    fn test_maps_plural_aliases_and_defaults_role() {
        let record = record_from_value(&json!({
            "nombres": " Ana ",
            "Apellidos": "Pérez",
            "email": "ana@gmail.com",
            "Contrasena": "1234",
            "direccion": "Av. Amazonas",
            "pais": "Ecuador",
            "edad": "25 años",
            "tipoIdentificacion": "ci",
            "identificacion": "1712345678"
        }));
        let dto = UserDto::from_record(&record, None);
        assert_eq!(dto.nombre, "Ana");
        assert_eq!(dto.apellido, "Pérez");
        assert_eq!(dto.edad, Some(25));
        assert_eq!(dto.tipo_identificacion, "ci");
        assert_eq!(dto.rol, "Cliente");
        assert_eq!(dto.id_usuario, None);
    }

    #[test]
    fn test_role_is_case_folded() {
        for raw in ["admin", "ADMIN", "Admin"] {
            let record = record_from_value(&json!({ "rol": raw }));
            assert_eq!(UserDto::from_record(&record, None).rol, "Admin");
        }
        let record = record_from_value(&json!({ "Rol": "Gerente" }));
        assert_eq!(UserDto::from_record(&record, None).rol, "Gerente");
    }

    #[test]
    fn test_snake_case_upstream_keys() {
        let record = record_from_value(&json!({
            "id_usuario": 4,
            "tipo_identificacion": "PASAPORTE",
            "Edad": 33
        }));
        let dto = UserDto::from_record(&record, None);
        assert_eq!(dto.id_usuario, Some(4));
        assert_eq!(dto.tipo_identificacion, "PASAPORTE");
        assert_eq!(dto.edad, Some(33));
        assert_eq!(UserDto::from_record(&record, Some(8)).id_usuario, Some(8));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let record = record_from_value(&json!({
            "Nombre": "Luis", "Apellido": "Mora", "Email": "luis@mail.com",
            "Contrasena": "x", "Direccion": "Quito", "Pais": "EC", "Edad": "40",
            "TipoIdentificacion": "LICENCIA", "Identificacion": "AB-1234", "Rol": "admin"
        }));
        let first = UserDto::from_record(&record, Some(3));
        let second = UserDto::from_record(&record_from_value(&serde_json::to_value(&first).unwrap()), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_registration_form_becomes_client() {
        let form = RegistrationForm {
            nombres: "Luis ".into(),
            apellidos: "Mora".into(),
            email: "luis@correo.com".into(),
            edad: "33".into(),
            tipo_identificacion: "pasaporte".into(),
            identificacion: "AB12345".into(),
            password: "Clave2024".into(),
            confirmar_password: "Clave2024".into(),
            ..RegistrationForm::default()
        };
        let dto = UserDto::from(&form);
        assert_eq!(dto.nombre, "Luis");
        assert_eq!(dto.edad, Some(33));
        assert_eq!(dto.tipo_identificacion, "PASAPORTE");
        assert_eq!(dto.contrasena, "Clave2024");
        assert_eq!(dto.rol, "Cliente");
        assert_eq!(dto.id_usuario, None);
    }
}
