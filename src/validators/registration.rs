//! Reglas del registro público de clientes.
//!
//! Más estrictas que las del panel: nombres solo con letras, teléfono,
//! contraseña segura y confirmación.

use lazy_static::lazy_static;
use regex::Regex;

use crate::dto::auth_dto::RegistrationForm;
use crate::dto::IdentificationType;
use crate::utils::validation::{
    matches_pattern, validate_phone, validate_range, validate_registration_email,
};

use super::user::{identification_violation, MAX_AGE, MIN_AGE};
use super::{ViolationList, Violations};

pub const MSG_OBLIGATORIOS: &str = "Todos los campos son obligatorios.";
pub const MSG_NOMBRES: &str = "El nombre solo puede contener letras y espacios.";
pub const MSG_APELLIDOS: &str = "Los apellidos solo pueden contener letras y espacios.";
pub const MSG_TELEFONO_DIGITOS: &str = "El teléfono solo puede contener números (sin signos).";
pub const MSG_TELEFONO_LONGITUD: &str = "El teléfono debe tener entre 9 y 10 dígitos.";
pub const MSG_DIRECCION: &str = "La dirección solo puede contener letras, números y espacios.";
pub const MSG_EMAIL: &str = "El correo electrónico no tiene un formato válido.";
pub const MSG_EDAD_DIGITOS: &str = "La edad debe contener solo números, sin signos.";
pub const MSG_EDAD_RANGO: &str = "Debes tener una edad entre 18 y 90 años para registrarte.";
pub const MSG_PASSWORD: &str =
    "La contraseña debe tener mínimo 8 caracteres, con mayúsculas, minúsculas y números.";
pub const MSG_PASSWORD_CONFIRMACION: &str = "Las contraseñas no coinciden.";
pub const MSG_TIPO_IDENTIFICACION: &str = "Debes seleccionar un tipo de identificación válido.";

lazy_static! {
    static ref LETTERS_REGEX: Regex = Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]+$").unwrap();
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ0-9\s]+$").unwrap();
    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Mínimo 8 caracteres con al menos una minúscula, una mayúscula y un dígito
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

impl Violations for RegistrationForm {
    fn violations(&self) -> Vec<String> {
        let mut errors = ViolationList::new();

        let required = [
            &self.nombres,
            &self.apellidos,
            &self.email,
            &self.telefono,
            &self.pais,
            &self.tipo_identificacion,
            &self.identificacion,
            &self.edad,
            &self.direccion,
            &self.password,
            &self.confirmar_password,
        ];
        errors.push_if(required.iter().any(|field| field.is_empty()), MSG_OBLIGATORIOS);

        if !self.nombres.is_empty() {
            errors.check(matches_pattern(&LETTERS_REGEX, &self.nombres, "letters"), MSG_NOMBRES);
        }
        if !self.apellidos.is_empty() {
            errors.check(matches_pattern(&LETTERS_REGEX, &self.apellidos, "letters"), MSG_APELLIDOS);
        }

        if !self.telefono.is_empty() {
            if let Err(error) = validate_phone(&self.telefono, 9, 10) {
                let message = if error.code == "phone_digits" {
                    MSG_TELEFONO_DIGITOS
                } else {
                    MSG_TELEFONO_LONGITUD
                };
                errors.push_if(true, message);
            }
        }

        if !self.direccion.is_empty() {
            errors.check(matches_pattern(&ADDRESS_REGEX, &self.direccion, "address"), MSG_DIRECCION);
        }

        if !self.email.is_empty() {
            errors.check(validate_registration_email(&self.email), MSG_EMAIL);
        }

        match matches_pattern(&DIGITS_REGEX, &self.edad, "digits") {
            Err(_) => errors.push_if(true, MSG_EDAD_DIGITOS),
            Ok(()) => {
                let in_range = self
                    .edad
                    .parse::<i64>()
                    .map(|edad| validate_range(edad, MIN_AGE, MAX_AGE).is_ok())
                    .unwrap_or(false);
                errors.push_if(!in_range, MSG_EDAD_RANGO);
            }
        }

        errors.push_if(!is_strong_password(&self.password), MSG_PASSWORD);
        errors.push_if(self.password != self.confirmar_password, MSG_PASSWORD_CONFIRMACION);

        match IdentificationType::from_normalized(&self.tipo_identificacion) {
            Some(kind) => {
                if let Some(message) = identification_violation(kind, &self.identificacion) {
                    errors.push_if(true, message);
                }
            }
            None => errors.push_if(true, MSG_TIPO_IDENTIFICACION),
        }

        errors.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::user::{MSG_CI, MSG_PASAPORTE};

    fn valid() -> RegistrationForm {
        RegistrationForm {
            nombres: "María José".into(),
            apellidos: "Núñez".into(),
            email: "maria@correo.ec".into(),
            telefono: "0991234567".into(),
            pais: "Ecuador".into(),
            edad: "28".into(),
            tipo_identificacion: "CI".into(),
            identificacion: "1712345678".into(),
            direccion: "Calle Larga 123".into(),
            password: "Clave2024".into(),
            confirmar_password: "Clave2024".into(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(valid().violations().is_empty());
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Abcdefg1"));
        assert!(!is_strong_password("abcdefg1"));
        assert!(!is_strong_password("ABCDEFG1"));
        assert!(!is_strong_password("Abcdefgh"));
        assert!(!is_strong_password("Abcde1"));
    }

    #[test]
    fn test_phone_rules() {
        let mut form = valid();
        form.telefono = "099-123456".into();
        assert_eq!(form.violations(), vec![MSG_TELEFONO_DIGITOS]);
        form.telefono = "09912345".into();
        assert_eq!(form.violations(), vec![MSG_TELEFONO_LONGITUD]);
    }

    #[test]
    fn test_age_must_be_digits_only() {
        let mut form = valid();
        form.edad = "3o".into();
        assert_eq!(form.violations(), vec![MSG_EDAD_DIGITOS]);
        form.edad = "17".into();
        assert_eq!(form.violations(), vec![MSG_EDAD_RANGO]);
    }

    #[test]
    fn test_identification_and_confirmation() {
        let mut form = valid();
        form.confirmar_password = "Otra2024".into();
        form.identificacion = "123".into();
        assert_eq!(form.violations(), vec![MSG_PASSWORD_CONFIRMACION, MSG_CI]);
        form.tipo_identificacion = "PASAPORTE".into();
        form.identificacion = "X1".into();
        assert_eq!(form.violations(), vec![MSG_PASSWORD_CONFIRMACION, MSG_PASAPORTE]);
        form.tipo_identificacion = "RUC".into();
        assert_eq!(form.violations(), vec![MSG_PASSWORD_CONFIRMACION, MSG_TIPO_IDENTIFICACION]);
    }

    #[test]
    fn test_empty_form() {
        let violations = RegistrationForm::default().violations();
        assert_eq!(violations.first().map(String::as_str), Some(MSG_OBLIGATORIOS));
        assert!(violations.contains(&MSG_TIPO_IDENTIFICACION.to_string()));
    }
}
