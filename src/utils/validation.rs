//! Utilidades de validación
//!
//! Este módulo contiene las reglas atómicas que usan los validadores de
//! entidades. Cada helper devuelve un `ValidationError` con su código; el
//! validador de la entidad decide el mensaje que ve el usuario.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Dominio solo letras y TLD de la lista permitida (nada de `gma1l.com.es`)
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Za-z0-9._%+-]+@[A-Za-z]{3,15}\.(com|net|org|ec|es)$").unwrap();
    /// Variante del registro público: el dominio admite dígitos y guiones
    static ref REGISTRATION_EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+\.(com|net|org|ec|es)$").unwrap();
    static ref HTTP_URL_REGEX: Regex = Regex::new(r"(?i)^https?://").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico (ambos extremos incluidos)
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email con TLD restringido
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    matches_pattern(&EMAIL_REGEX, value, "email")
}

/// Validar email del formulario de registro público
pub fn validate_registration_email(value: &str) -> Result<(), ValidationError> {
    matches_pattern(&REGISTRATION_EMAIL_REGEX, value, "email")
}

/// Validar que una URL sea absoluta http/https
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    matches_pattern(&HTTP_URL_REGEX, value, "url")
}

/// Validar teléfono: solo dígitos, entre `min` y `max`
pub fn validate_phone(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("phone_digits");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    validate_length(value, min, max).map_err(|_| {
        let mut error = ValidationError::new("phone_length");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar un valor contra una expresión regular
pub fn matches_pattern(
    pattern: &Regex,
    value: &str,
    code: &'static str,
) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        let mut error = ValidationError::new(code);
        error.add_param("value".into(), &value.to_string());
        error.add_param("pattern".into(), &pattern.as_str().to_string());
        return Err(error);
    }
    Ok(())
}
