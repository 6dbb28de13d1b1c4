//! Datos de referencia de los formularios: categorías y transmisiones.

use std::collections::HashSet;

use serde_json::Value;

use crate::dto::{Category, TransmissionOption};
use crate::utils::coercion::{to_int_or_null, to_trimmed_string};
use crate::utils::fields::resolve;

use super::envelope::{normalize_list, Resource};

const CATEGORY_ID: &[&str] = &["IdCategoria", "idCategoria", "idCategoriaVehiculo", "id_categoria"];
const CATEGORY_NAME: &[&str] = &["NombreCategoria", "nombreCategoria", "Categoria", "categoria"];
const CATEGORY_ENDPOINT_NAME: &[&str] = &["Nombre", "nombre", "NombreCategoria", "nombreCategoria"];

/// Lista fija usada cuando la API no entrega transmisiones utilizables
pub fn fallback_transmissions() -> Vec<TransmissionOption> {
    vec![
        TransmissionOption::new("MT", "Manual"),
        TransmissionOption::new("AT", "Automática"),
        TransmissionOption::new("CVT", "CVT"),
    ]
}

/// Categorías tal como las entrega `/categoriasvehiculo`
pub fn normalize_categories(payload: &Value) -> Vec<Category> {
    collect_categories(&normalize_list(payload, Resource::Categories), CATEGORY_ENDPOINT_NAME)
}

/// Reconstruye las categorías a partir de los vehículos cuando el endpoint
/// de categorías falla: pares id/nombre embebidos, sin duplicados por id y
/// en el orden en que aparecen.
pub fn derive_categories(vehicles: &[Value]) -> Vec<Category> {
    collect_categories(vehicles, CATEGORY_NAME)
}

fn collect_categories(items: &[Value], name_aliases: &[&str]) -> Vec<Category> {
    let mut seen = HashSet::new();

    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|record| {
            let id = to_int_or_null(resolve(record, CATEGORY_ID))?;
            let nombre = to_trimmed_string(resolve(record, name_aliases));
            (!nombre.is_empty()).then_some(Category { id_categoria: id, nombre })
        })
        .filter(|category| seen.insert(category.id_categoria))
        .collect()
}

/// Opciones de transmisión a partir de lo que entregue la API.
///
/// Acepta strings (`"Manual"`) u objetos con `nombre`/`descripcion`. Cada
/// elemento se clasifica en `MT`, `AT` o `CVT`; si un código se repite gana
/// la última etiqueta pero se conserva la primera posición. Sin resultados
/// utilizables se devuelve la lista fija.
pub fn normalize_transmissions(payload: &Value) -> Vec<TransmissionOption> {
    let Some(items) = payload.as_array() else {
        return fallback_transmissions();
    };

    let mut options: Vec<TransmissionOption> = Vec::new();
    for option in items.iter().filter_map(classify_transmission) {
        match options.iter_mut().find(|existing| existing.codigo == option.codigo) {
            Some(existing) => *existing = option,
            None => options.push(option),
        }
    }

    if options.is_empty() {
        fallback_transmissions()
    } else {
        options
    }
}

fn classify_transmission(item: &Value) -> Option<TransmissionOption> {
    match item {
        Value::String(label) => {
            let lower = label.to_lowercase();
            let codigo = if lower.contains("man") {
                "MT"
            } else if lower.contains("aut") {
                "AT"
            } else if lower.contains("cvt") {
                "CVT"
            } else {
                return None;
            };
            Some(TransmissionOption::new(codigo, label))
        }
        Value::Object(record) => {
            let nombre = to_trimmed_string(resolve(record, &["nombre", "Nombre"]));
            let descripcion = to_trimmed_string(resolve(record, &["descripcion", "Descripcion"]));
            let texto = format!("{} {}", nombre, descripcion).to_lowercase();

            let codigo = if texto.contains("aut") {
                "AT"
            } else if texto.contains("cvt") {
                "CVT"
            } else {
                "MT"
            };

            let label = [descripcion.as_str(), nombre.as_str()]
                .into_iter()
                .find(|candidate| !candidate.is_empty())
                .unwrap_or_else(|| default_label(codigo));

            Some(TransmissionOption::new(codigo, label))
        }
        _ => None,
    }
}

fn default_label(codigo: &str) -> &'static str {
    match codigo {
        "MT" => "Manual",
        "AT" => "Automática",
        _ => "CVT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_derive_categories_dedups_in_first_seen_order() {
        let vehicles = vec![
            json!({ "IdVehiculo": 1, "IdCategoria": 2, "NombreCategoria": "SUV" }),
            json!({ "IdVehiculo": 2, "idCategoria": "1", "categoria": "Sedán" }),
            json!({ "IdVehiculo": 3, "IdCategoria": 2, "NombreCategoria": "SUV grande" }),
            json!({ "IdVehiculo": 4, "IdCategoria": 5 }),
            json!("basura"),
        ];
        assert_eq!(
            derive_categories(&vehicles),
            vec![
                Category { id_categoria: 2, nombre: "SUV".into() },
                Category { id_categoria: 1, nombre: "Sedán".into() },
            ]
        );
    }

    #[test]
    fn test_normalize_categories_from_endpoint() {
        let payload = json!({ "data": [{ "IdCategoria": 3, "Nombre": "Económico" }, { "Nombre": "Sin id" }] });
        assert_eq!(
            normalize_categories(&payload),
            vec![Category { id_categoria: 3, nombre: "Económico".into() }]
        );
    }

    #[test]
    fn test_transmissions_from_strings() {
        let options = normalize_transmissions(&json!(["Manual", "Automática", "Híbrido", "cvt"]));
        assert_eq!(
            options,
            vec![
                TransmissionOption::new("MT", "Manual"),
                TransmissionOption::new("AT", "Automática"),
                TransmissionOption::new("CVT", "cvt"),
            ]
        );
    }

    #[test]
    fn test_transmissions_last_label_wins_first_position_kept() {
        let payload = json!([
            { "nombre": "Automática" },
            { "nombre": "Manual" },
            { "Nombre": "AT", "Descripcion": "Automática de 8 velocidades" },
        ]);
        assert_eq!(
            normalize_transmissions(&payload),
            vec![
                TransmissionOption::new("AT", "Automática de 8 velocidades"),
                TransmissionOption::new("MT", "Manual"),
            ]
        );
    }

    #[test]
    fn test_transmissions_fallback() {
        assert_eq!(normalize_transmissions(&json!({ "data": [] })), fallback_transmissions());
        assert_eq!(normalize_transmissions(&json!([])), fallback_transmissions());
        assert_eq!(normalize_transmissions(&json!(["Eléctrica"])), fallback_transmissions());
    }

    #[test]
    fn test_object_without_text_uses_default_label() {
        assert_eq!(
            normalize_transmissions(&json!([{ "IdTransmision": 1 }])),
            vec![TransmissionOption::new("MT", "Manual")]
        );
    }
}
