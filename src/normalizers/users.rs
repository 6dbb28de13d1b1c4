use serde_json::Value;

use crate::dto::UserDto;

use super::envelope::Resource;
use super::{normalize_entities, normalize_entity};

/// Usuarios de la API en forma canónica
pub fn normalize_users(payload: &Value) -> Vec<UserDto> {
    normalize_entities(payload, Resource::Users)
}

pub fn normalize_user(payload: &Value, id: i64) -> Option<UserDto> {
    normalize_entity(payload, Some(id))
}
