//! Clientes de la API de gestión
//!
//! Cada entidad expone el mismo contrato CRUD. Los controladores dependen de
//! los traits, no de `reqwest`, para poder sustituir el colaborador en las
//! pruebas. Las respuestas se devuelven crudas: la normalización ocurre en
//! `crate::normalizers`.

pub mod error;
pub mod rest;

pub use error::{ClientError, ClientResult};
pub use rest::{RestApiClient, RestResource};

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::dto::{InvoiceDto, ReservationDto, UserDto, VehicleDto};

/// Contrato CRUD por entidad
#[async_trait]
pub trait EntityClient<T>: Send + Sync
where
    T: Serialize + Send + Sync,
{
    async fn list(&self) -> ClientResult<Value>;
    async fn get_by_id(&self, id: i64) -> ClientResult<Value>;
    async fn create(&self, dto: &T) -> ClientResult<Value>;
    async fn update(&self, id: i64, dto: &T) -> ClientResult<Value>;
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
pub trait ReservationClient: EntityClient<ReservationDto> {
    async fn change_status(&self, id: i64, status: &str) -> ClientResult<()>;
}

/// Listas de referencia para los formularios
#[async_trait]
pub trait ReferenceDataClient: Send + Sync {
    async fn categories(&self) -> ClientResult<Value>;
    async fn transmissions(&self) -> ClientResult<Value>;
    async fn branches(&self) -> ClientResult<Value>;
    async fn promotions(&self) -> ClientResult<Value>;
}

/// Colaboradores inyectados en el estado de la aplicación
#[derive(Clone)]
pub struct ApiClients {
    pub vehicles: Arc<dyn EntityClient<VehicleDto>>,
    pub users: Arc<dyn EntityClient<UserDto>>,
    pub reservations: Arc<dyn ReservationClient>,
    pub invoices: Arc<dyn EntityClient<InvoiceDto>>,
    pub reference: Arc<dyn ReferenceDataClient>,
}

impl ApiClients {
    /// Todos los colaboradores sobre el mismo cliente REST
    pub fn rest(client: &RestApiClient) -> Self {
        Self {
            vehicles: Arc::new(client.resource::<VehicleDto>("vehiculos")),
            users: Arc::new(client.resource::<UserDto>("usuarios")),
            reservations: Arc::new(client.resource::<ReservationDto>("reservas")),
            invoices: Arc::new(client.resource::<InvoiceDto>("facturas")),
            reference: Arc::new(client.clone()),
        }
    }
}
