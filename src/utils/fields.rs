//! Resolución de campos con alias
//!
//! Los formularios y la API remota envían el mismo campo con distintas
//! variantes de nombre (`PrecioDia`, `precioDia`, `precio_dia`, `precio`).
//! Cada campo lógico declara su lista ordenada de alias; gana el primero
//! presente y distinto de `null`.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Registro dinámico de entrada (cuerpo de formulario o payload JSON)
pub type Record = Map<String, Value>;

/// Campo lógico con sus alias en orden de prioridad
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldAliases {
    pub const fn new(field: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { field, aliases }
    }

    /// Valor del primer alias presente en el registro
    pub fn resolve<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        resolve(record, self.aliases)
    }
}

/// Devuelve el valor del primer alias presente y no `null`.
///
/// No distingue el string vacío de la ausencia: `""` bajo el primer alias
/// gana sobre un valor bajo un alias posterior.
pub fn resolve<'a>(record: &'a Record, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|alias| record.get(*alias))
        .find(|value| !value.is_null())
}

/// Convierte los campos de un formulario urlencoded en un registro
pub fn record_from_form(fields: HashMap<String, String>) -> Record {
    fields
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Registro a partir de un `Value`; cualquier cosa que no sea objeto → vacío
pub fn record_from_value(value: &Value) -> Record {
    value.as_object().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PRECIO: FieldAliases =
        FieldAliases::new("precio_dia", &["PrecioDia", "precioDia", "precio_dia", "precio"]);

    #[test]
    fn test_first_alias_wins() {
        let record = record_from_value(&json!({ "precio": "10", "precioDia": "20" }));
        assert_eq!(PRECIO.resolve(&record), Some(&json!("20")));
    }

    #[test]
    fn test_null_is_skipped() {
        let record = record_from_value(&json!({ "PrecioDia": null, "precio_dia": "30" }));
        assert_eq!(PRECIO.resolve(&record), Some(&json!("30")));
    }

    #[test]
    fn test_empty_string_is_not_skipped() {
        let record = record_from_value(&json!({ "PrecioDia": "", "precio": "30" }));
        assert_eq!(PRECIO.resolve(&record), Some(&json!("")));
    }

    #[test]
    fn test_no_case_folding() {
        let record = record_from_value(&json!({ "PRECIODIA": "30" }));
        assert_eq!(PRECIO.resolve(&record), None);
    }

    #[test]
    fn test_record_from_form() {
        let mut form = HashMap::new();
        form.insert("Marca".to_string(), "Kia".to_string());
        let record = record_from_form(form);
        assert_eq!(record.get("Marca"), Some(&json!("Kia")));
        assert!(record_from_value(&json!([1, 2])).is_empty());
    }
}
