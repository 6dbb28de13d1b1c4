use serde_json::Value;

/// Colección remota, usada para conocer su clave alternativa de sobre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Vehicles,
    Users,
    Reservations,
    Invoices,
    Categories,
    Transmissions,
    Branches,
    Promotions,
}

/// Clave genérica que algunos endpoints usan en lugar del nombre de la entidad
pub const GENERIC_ITEMS_KEY: &str = "Items";

impl Resource {
    /// Propiedades aceptadas como sobre, en orden de prioridad
    pub fn alternate_keys(self) -> [&'static str; 2] {
        let key = match self {
            Resource::Vehicles => "Vehiculos",
            Resource::Users => "Usuarios",
            Resource::Reservations => "Reservas",
            Resource::Invoices => "Facturas",
            Resource::Categories => "Categorias",
            Resource::Transmissions => "Transmisiones",
            Resource::Branches => "Sucursales",
            Resource::Promotions => "Promociones",
        };
        [key, GENERIC_ITEMS_KEY]
    }
}

/// Forma en que llegó la lista
#[derive(Debug, PartialEq)]
pub enum Envelope<'a> {
    /// `[...]`
    BareList(&'a [Value]),
    /// `{ "data": [...] }`
    Enveloped(&'a [Value]),
    /// `{ "Vehiculos": [...] }`, `{ "Items": [...] }`, ...
    AlternateKey(&'static str, &'a [Value]),
    Unrecognized,
}

impl Envelope<'_> {
    pub fn items(&self) -> &[Value] {
        match self {
            Envelope::BareList(items)
            | Envelope::Enveloped(items)
            | Envelope::AlternateKey(_, items) => items,
            Envelope::Unrecognized => &[],
        }
    }
}

/// Clasifica el payload probando, en orden: arreglo desnudo, `data`,
/// claves alternativas del recurso.
pub fn classify(payload: &Value, resource: Resource) -> Envelope<'_> {
    if let Some(items) = payload.as_array() {
        return Envelope::BareList(items);
    }

    if let Some(items) = payload.get("data").and_then(Value::as_array) {
        return Envelope::Enveloped(items);
    }

    resource
        .alternate_keys()
        .into_iter()
        .find_map(|key| {
            payload
                .get(key)
                .and_then(Value::as_array)
                .map(|items| Envelope::AlternateKey(key, items))
        })
        .unwrap_or(Envelope::Unrecognized)
}

/// Lista canónica; un sobre desconocido degrada a lista vacía
pub fn normalize_list(payload: &Value, resource: Resource) -> Vec<Value> {
    let envelope = classify(payload, resource);
    if envelope == Envelope::Unrecognized && !payload.is_null() {
        tracing::debug!("⚠️ Sobre no reconocido para {:?}, se usa lista vacía", resource);
    }
    envelope.items().to_vec()
}

/// Registro canónico: gana un objeto bajo `data`, si no el propio payload.
/// Un payload que no es objeto (incluido `null`) no es un registro.
pub fn normalize_record(payload: &Value) -> Option<Value> {
    match payload.get("data") {
        Some(data @ Value::Object(_)) => Some(data.clone()),
        _ if payload.is_object() => Some(payload.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_known_envelopes_yield_the_same_list() {
        let expected = vec![json!(1), json!(2), json!(3)];
        assert_eq!(normalize_list(&json!({ "data": [1, 2, 3] }), Resource::Vehicles), expected);
        assert_eq!(normalize_list(&json!([1, 2, 3]), Resource::Vehicles), expected);
        assert_eq!(normalize_list(&json!({ "Items": [1, 2, 3] }), Resource::Vehicles), expected);
        assert_eq!(normalize_list(&json!({ "Vehiculos": [1, 2, 3] }), Resource::Vehicles), expected);
    }

    #[test]
    fn test_unrecognized_envelope_is_empty() {
        assert!(normalize_list(&json!({ "resultado": [1, 2, 3] }), Resource::Users).is_empty());
        assert!(normalize_list(&json!({ "data": { "IdUsuario": 1 } }), Resource::Users).is_empty());
        assert!(normalize_list(&json!("texto"), Resource::Users).is_empty());
        assert!(normalize_list(&Value::Null, Resource::Users).is_empty());
    }

    #[test]
    fn test_alternate_key_belongs_to_its_resource() {
        let payload = json!({ "Sucursales": [{ "Id": 1 }] });
        assert_eq!(classify(&payload, Resource::Branches).items().len(), 1);
        assert_eq!(classify(&payload, Resource::Promotions), Envelope::Unrecognized);
    }

    #[test]
    fn test_classification_order() {
        let payload = json!({ "data": [1], "Items": [2, 3] });
        assert!(matches!(classify(&payload, Resource::Invoices), Envelope::Enveloped(items) if items.len() == 1));
    }

    #[test]
    fn test_normalize_record() {
        assert_eq!(
            normalize_record(&json!({ "data": { "IdVehiculo": 4 } })),
            Some(json!({ "IdVehiculo": 4 }))
        );
        assert_eq!(
            normalize_record(&json!({ "IdVehiculo": 4 })),
            Some(json!({ "IdVehiculo": 4 }))
        );
        assert_eq!(normalize_record(&Value::Null), None);
        assert_eq!(normalize_record(&json!([1])), None);
    }
}
