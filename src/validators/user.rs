use lazy_static::lazy_static;
use regex::Regex;

use crate::dto::{IdentificationType, Role, UserDto};
use crate::utils::validation::{matches_pattern, validate_email, validate_not_empty, validate_range};

use super::{ViolationList, Violations};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 90;

pub const MSG_NOMBRE: &str = "El nombre es obligatorio.";
pub const MSG_APELLIDO: &str = "El apellido es obligatorio.";
pub const MSG_EMAIL: &str = "El correo electrónico es obligatorio.";
pub const MSG_EMAIL_FORMATO: &str =
    "El correo electrónico no tiene un formato válido (ej: usuario@gmail.com).";
pub const MSG_CONTRASENA: &str = "La contraseña es obligatoria.";
pub const MSG_DIRECCION: &str = "La dirección es obligatoria.";
pub const MSG_PAIS: &str = "El país es obligatorio.";
pub const MSG_EDAD: &str = "La edad es obligatoria.";
pub const MSG_EDAD_RANGO: &str = "La edad debe estar entre 18 y 90 años.";
pub const MSG_TIPO_IDENTIFICACION: &str = "El tipo de identificación es obligatorio.";
pub const MSG_TIPO_IDENTIFICACION_INVALIDO: &str =
    "El tipo de identificación debe ser CI, PASAPORTE o LICENCIA.";
pub const MSG_IDENTIFICACION: &str = "La identificación es obligatoria.";
pub const MSG_CI: &str = "La cédula ecuatoriana debe tener exactamente 10 dígitos numéricos.";
pub const MSG_PASAPORTE: &str = "El pasaporte debe tener entre 6 y 15 caracteres alfanuméricos.";
pub const MSG_LICENCIA: &str =
    "La licencia debe tener entre 6 y 20 caracteres; se permiten letras, números y guiones.";
pub const MSG_ROL: &str = "El rol debe ser Cliente o Admin.";

lazy_static! {
    static ref CI_REGEX: Regex = Regex::new(r"^\d{10}$").unwrap();
    static ref PASAPORTE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{6,15}$").unwrap();
    static ref LICENCIA_REGEX: Regex = Regex::new(r"^[A-Za-z0-9-]{6,20}$").unwrap();
}

/// Formato de identificación por tipo
pub struct IdentificationRule {
    pub kind: IdentificationType,
    pub pattern: &'static Regex,
    pub message: &'static str,
}

/// Tabla de despacho por tipo normalizado
pub fn identification_rule(kind: IdentificationType) -> IdentificationRule {
    match kind {
        IdentificationType::Ci => IdentificationRule {
            kind,
            pattern: &CI_REGEX,
            message: MSG_CI,
        },
        IdentificationType::Pasaporte => IdentificationRule {
            kind,
            pattern: &PASAPORTE_REGEX,
            message: MSG_PASAPORTE,
        },
        IdentificationType::Licencia => IdentificationRule {
            kind,
            pattern: &LICENCIA_REGEX,
            message: MSG_LICENCIA,
        },
    }
}

/// Verifica el formato de `value` según el tipo; `None` si el formato es
/// correcto, el mensaje de la regla si no
pub fn identification_violation(kind: IdentificationType, value: &str) -> Option<&'static str> {
    let rule = identification_rule(kind);
    matches_pattern(rule.pattern, value, rule.kind.as_str())
        .err()
        .map(|_| rule.message)
}

impl Violations for UserDto {
    fn violations(&self) -> Vec<String> {
        let mut errors = ViolationList::new();

        errors.check(validate_not_empty(&self.nombre), MSG_NOMBRE);
        errors.check(validate_not_empty(&self.apellido), MSG_APELLIDO);

        if self.email.is_empty() {
            errors.push_if(true, MSG_EMAIL);
        } else {
            errors.check(validate_email(&self.email), MSG_EMAIL_FORMATO);
        }

        errors.check(validate_not_empty(&self.contrasena), MSG_CONTRASENA);
        errors.check(validate_not_empty(&self.direccion), MSG_DIRECCION);
        errors.check(validate_not_empty(&self.pais), MSG_PAIS);

        match self.edad {
            None => errors.push_if(true, MSG_EDAD),
            Some(edad) => errors.check(validate_range(edad, MIN_AGE, MAX_AGE), MSG_EDAD_RANGO),
        }

        let kind = IdentificationType::from_normalized(&self.tipo_identificacion);
        if self.tipo_identificacion.is_empty() {
            errors.push_if(true, MSG_TIPO_IDENTIFICACION);
        } else {
            errors.push_if(kind.is_none(), MSG_TIPO_IDENTIFICACION_INVALIDO);
        }

        errors.check(validate_not_empty(&self.identificacion), MSG_IDENTIFICACION);

        if let (Some(kind), false) = (kind, self.identificacion.is_empty()) {
            if let Some(message) = identification_violation(kind, &self.identificacion) {
                errors.push_if(true, message);
            }
        }

        errors.push_if(Role::normalize(&self.rol).is_none(), MSG_ROL);

        errors.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappers::FromRecord;
    use crate::utils::fields::record_from_value;
    use serde_json::json;

    fn valid() -> UserDto {
        UserDto {
            id_usuario: None,
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: "ana.perez@gmail.com".into(),
            contrasena: "Secreta1".into(),
            direccion: "Av. 6 de Diciembre".into(),
            pais: "Ecuador".into(),
            edad: Some(30),
            tipo_identificacion: "CI".into(),
            identificacion: "1712345678".into(),
            rol: "Cliente".into(),
        }
    }

    fn with_id(tipo: &str, identificacion: &str) -> Vec<String> {
        let mut dto = valid();
        dto.tipo_identificacion = tipo.into();
        dto.identificacion = identificacion.into();
        dto.violations()
    }

    #[test]
    fn test_valid_user() {
        assert!(valid().is_valid());
    }

    #[test]
    fn test_ci_boundaries() {
        assert!(with_id("CI", "1234567890").is_empty());
        assert_eq!(with_id("CI", "123456789"), vec![MSG_CI]);
        assert_eq!(with_id("CI", "12345678901"), vec![MSG_CI]);
        assert_eq!(with_id("ci", "12345678a0"), vec![MSG_CI]);
    }

    #[test]
    fn test_passport_boundaries() {
        assert!(with_id("PASAPORTE", "AB1234").is_empty());
        assert!(with_id("pasaporte", &"A".repeat(15)).is_empty());
        assert_eq!(with_id("PASAPORTE", "AB123"), vec![MSG_PASAPORTE]);
        assert_eq!(with_id("PASAPORTE", &"A".repeat(16)), vec![MSG_PASAPORTE]);
        assert_eq!(with_id("PASAPORTE", "AB-1234"), vec![MSG_PASAPORTE]);
    }

    #[test]
    fn test_license_boundaries() {
        assert!(with_id("LICENCIA", "AB-123").is_empty());
        assert!(with_id("Licencia", &"9".repeat(20)).is_empty());
        assert_eq!(with_id("LICENCIA", "AB-12"), vec![MSG_LICENCIA]);
        assert_eq!(with_id("LICENCIA", &"9".repeat(21)), vec![MSG_LICENCIA]);
        assert_eq!(with_id("LICENCIA", "AB_1234"), vec![MSG_LICENCIA]);
    }

    #[test]
    fn test_unknown_type_reports_itself() {
        assert_eq!(with_id("RUC", "1790012345001"), vec![MSG_TIPO_IDENTIFICACION_INVALIDO]);
    }

    #[test]
    fn test_format_check_needs_both_fields() {
        assert_eq!(with_id("", "123"), vec![MSG_TIPO_IDENTIFICACION]);
        assert_eq!(with_id("CI", ""), vec![MSG_IDENTIFICACION]);
    }

    #[test]
    fn test_age_boundaries() {
        let mut dto = valid();
        for edad in [18, 90] {
            dto.edad = Some(edad);
            assert!(dto.violations().is_empty());
        }
        for edad in [17, 91] {
            dto.edad = Some(edad);
            assert_eq!(dto.violations(), vec![MSG_EDAD_RANGO]);
        }
        dto.edad = None;
        assert_eq!(dto.violations(), vec![MSG_EDAD]);
    }

    #[test]
    fn test_age_typed_with_letters() {
        let mut form = json!({
            "Nombre": "Ana",
            "Apellido": "Pérez",
            "Email": "ana.perez@gmail.com",
            "Contrasena": "Secreta1",
            "Direccion": "Av. 6 de Diciembre",
            "Pais": "Ecuador",
            "Edad": "3o",
            "TipoIdentificacion": "CI",
            "Identificacion": "1712345678",
            "Rol": "Cliente"
        });

        // Se conservan los dígitos: "3o" queda en 3 y falla por rango
        let dto = UserDto::from_record(&record_from_value(&form), None);
        assert_eq!(dto.edad, Some(3));
        assert_eq!(dto.violations(), vec![MSG_EDAD_RANGO]);

        form["Edad"] = json!("treinta");
        let dto = UserDto::from_record(&record_from_value(&form), None);
        assert_eq!(dto.edad, None);
        assert_eq!(dto.violations(), vec![MSG_EDAD]);
    }

    #[test]
    fn test_email_and_role() {
        let mut dto = valid();
        dto.email = "ana@gmail.com.es".into();
        dto.rol = "Gerente".into();
        assert_eq!(dto.violations(), vec![MSG_EMAIL_FORMATO, MSG_ROL]);
        dto.email = String::new();
        dto.rol = "admin".into();
        assert_eq!(dto.violations(), vec![MSG_EMAIL]);
    }

    #[test]
    fn test_empty_user_accumulates_in_order() {
        let dto = UserDto {
            id_usuario: None,
            nombre: String::new(),
            apellido: String::new(),
            email: String::new(),
            contrasena: String::new(),
            direccion: String::new(),
            pais: String::new(),
            edad: None,
            tipo_identificacion: String::new(),
            identificacion: String::new(),
            rol: "Cliente".into(),
        };
        assert_eq!(
            dto.violations(),
            vec![
                MSG_NOMBRE,
                MSG_APELLIDO,
                MSG_EMAIL,
                MSG_CONTRASENA,
                MSG_DIRECCION,
                MSG_PAIS,
                MSG_EDAD,
                MSG_TIPO_IDENTIFICACION,
                MSG_IDENTIFICACION,
            ]
        );
    }
}
