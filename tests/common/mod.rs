//! Colaborador en memoria que sustituye a la API de gestión en las pruebas.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use urbandrive_admin::clients::{
    ApiClients, ClientError, ClientResult, EntityClient, ReferenceDataClient, ReservationClient,
};
use urbandrive_admin::config::EnvironmentConfig;
use urbandrive_admin::utils::jwt::{generate_token, JwtConfig};
use urbandrive_admin::AppState;

pub fn upstream_failure(body: Option<Value>) -> ClientError {
    ClientError::Status { status: 500, body }
}

/// Recurso CRUD: `None` en `list`/`item` simula un fallo de la API
#[derive(Default)]
pub struct FakeResource {
    pub list: Option<Value>,
    pub item: Option<Value>,
    pub failure_body: Option<Value>,
    pub sent: Mutex<Vec<Value>>,
    pub deleted: Mutex<Vec<i64>>,
    pub status_changes: Mutex<Vec<(i64, String)>>,
}

impl FakeResource {
    pub fn listing(list: Value) -> Self {
        Self {
            list: Some(list),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Value> {
        self.sent.lock().unwrap().clone()
    }

    fn record<T: Serialize>(&self, dto: &T) -> ClientResult<Value> {
        self.sent.lock().unwrap().push(serde_json::to_value(dto).unwrap());
        match &self.failure_body {
            Some(body) => Err(upstream_failure(Some(body.clone()))),
            None => Ok(json!({ "data": serde_json::to_value(dto).unwrap() })),
        }
    }
}

#[async_trait]
impl<T> EntityClient<T> for FakeResource
where
    T: Serialize + Send + Sync,
{
    async fn list(&self) -> ClientResult<Value> {
        self.list.clone().ok_or_else(|| upstream_failure(None))
    }

    async fn get_by_id(&self, _id: i64) -> ClientResult<Value> {
        self.item
            .clone()
            .ok_or(ClientError::Status { status: 404, body: None })
    }

    async fn create(&self, dto: &T) -> ClientResult<Value> {
        self.record(dto)
    }

    async fn update(&self, _id: i64, dto: &T) -> ClientResult<Value> {
        self.record(dto)
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

#[async_trait]
impl ReservationClient for FakeResource {
    async fn change_status(&self, id: i64, status: &str) -> ClientResult<()> {
        self.status_changes.lock().unwrap().push((id, status.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeReference {
    pub categories: Option<Value>,
    pub transmissions: Option<Value>,
    pub branches: Option<Value>,
    pub promotions: Option<Value>,
}

impl FakeReference {
    pub fn available() -> Self {
        Self {
            categories: Some(json!([{ "IdCategoria": 1, "Nombre": "SUV" }])),
            transmissions: Some(json!([{ "IdTransmision": 2, "Nombre": "Automática" }])),
            branches: Some(json!({ "data": [{ "IdSucursal": 1, "Nombre": "Quito Norte" }] })),
            promotions: Some(json!([])),
        }
    }
}

#[async_trait]
impl ReferenceDataClient for FakeReference {
    async fn categories(&self) -> ClientResult<Value> {
        self.categories.clone().ok_or_else(|| upstream_failure(None))
    }

    async fn transmissions(&self) -> ClientResult<Value> {
        self.transmissions.clone().ok_or_else(|| upstream_failure(None))
    }

    async fn branches(&self) -> ClientResult<Value> {
        self.branches.clone().ok_or_else(|| upstream_failure(None))
    }

    async fn promotions(&self) -> ClientResult<Value> {
        self.promotions.clone().ok_or_else(|| upstream_failure(None))
    }
}

/// Colaboradores con acceso a cada recurso para inspeccionarlo después
pub struct FakeApi {
    pub vehicles: Arc<FakeResource>,
    pub users: Arc<FakeResource>,
    pub reservations: Arc<FakeResource>,
    pub invoices: Arc<FakeResource>,
    pub reference: Arc<FakeReference>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            vehicles: Arc::new(FakeResource::listing(json!([]))),
            users: Arc::new(FakeResource::listing(users_payload())),
            reservations: Arc::new(FakeResource::listing(json!([]))),
            invoices: Arc::new(FakeResource::listing(json!([]))),
            reference: Arc::new(FakeReference::available()),
        }
    }
}

impl FakeApi {
    pub fn clients(&self) -> ApiClients {
        ApiClients {
            vehicles: self.vehicles.clone(),
            users: self.users.clone(),
            reservations: self.reservations.clone(),
            invoices: self.invoices.clone(),
            reference: self.reference.clone(),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(EnvironmentConfig::default(), self.clients())
    }
}

pub fn users_payload() -> Value {
    json!({
        "data": [
            {
                "IdUsuario": 1,
                "Nombre": "Ana",
                "Apellido": "Pérez",
                "Email": "admin@urbandrive.ec",
                "Contrasena": "Admin2024",
                "Rol": "Admin"
            },
            {
                "IdUsuario": 2,
                "Nombre": "Luis",
                "Apellido": "Mora",
                "Email": "luis@correo.ec",
                "Contrasena": "Cliente2024",
                "Rol": "Cliente"
            }
        ]
    })
}

pub fn token_for(rol: &str) -> String {
    let config = JwtConfig::from(&EnvironmentConfig::default());
    generate_token(1, "admin@urbandrive.ec", rol, &config).unwrap()
}
