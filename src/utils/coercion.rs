//! Conversión de valores crudos a tipos
//!
//! Todas las funciones son totales: cualquier entrada (string, número,
//! `null` o ausente) produce un valor definido. La validación posterior es la
//! única etapa que decide si un valor degradado es inválido.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Representación textual de un valor crudo, `None` para `null`/ausente
fn raw_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Prefijo numérico entero (`[+-]?\d+`) tras quitar espacios iniciales
fn leading_integer(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    (end > digits_start).then(|| &text[..end])
}

/// Prefijo decimal (`[+-]?\d*(\.\d+)?`) tras quitar espacios iniciales
fn leading_decimal(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }
    has_digits.then(|| &text[..end])
}

/// Entero o `None`. Acepta prefijos numéricos (`"12abc"` → 12) y trunca
/// decimales (`"12.7"` → 12).
pub fn to_int_or_null(value: Option<&Value>) -> Option<i64> {
    if let Some(Value::Number(n)) = value {
        return n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));
    }
    let text = raw_text(value)?;
    leading_integer(&text)?.parse::<i64>().ok()
}

/// Decimal o cero cuando está vacío, ausente o no es numérico
pub fn to_decimal_or_zero(value: Option<&Value>) -> Decimal {
    if let Some(Value::Number(n)) = value {
        return Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(Decimal::from_f64))
            .unwrap_or(Decimal::ZERO);
    }
    raw_text(value)
        .as_deref()
        .and_then(leading_decimal)
        .and_then(|prefix| Decimal::from_str(prefix.trim_start_matches('+')).ok())
        .unwrap_or(Decimal::ZERO)
}

/// String recortado; `null`/ausente → vacío
pub fn to_trimmed_string(value: Option<&Value>) -> String {
    raw_text(value).map(|s| s.trim().to_string()).unwrap_or_default()
}

/// String recortado o `None` si queda vacío
pub fn to_optional_string(value: Option<&Value>) -> Option<String> {
    let text = to_trimmed_string(value);
    (!text.is_empty()).then_some(text)
}

/// Elimina todo carácter no numérico antes de convertir; sin dígitos → `None`
pub fn to_digits_only_int(value: Option<&Value>) -> Option<i64> {
    let digits: String = raw_text(value)?
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}
