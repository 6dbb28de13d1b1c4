use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::EnvironmentConfig;
use crate::dto::ReservationDto;

use super::{ClientError, ClientResult, EntityClient, ReferenceDataClient, ReservationClient};

/// Cliente HTTP de la API de gestión
#[derive(Clone)]
pub struct RestApiClient {
    client: Client,
    base_url: String,
}

impl RestApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &EnvironmentConfig) -> ClientResult<Self> {
        Self::new(&config.api_base_url, Duration::from_secs(config.api_timeout_secs))
    }

    /// Recurso CRUD bajo `path` (por ejemplo `vehiculos`)
    pub fn resource<T>(&self, path: &'static str) -> RestResource<T> {
        RestResource {
            client: self.clone(),
            path,
            _dto: PhantomData,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json(&self, path: &str) -> ClientResult<Value> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Envía la petición y decodifica el cuerpo. Un cuerpo vacío es `null`;
    /// un estado no exitoso se convierte en `ClientError::Status` con el
    /// cuerpo de error cuando es JSON.
    async fn send(&self, request: RequestBuilder) -> ClientResult<Value> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let url = response.url().to_string();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            error!("❌ API de gestión respondió {} en {}: {:?}", status, url, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("✅ {} {} ({} bytes)", status, url, bytes.len());

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Recurso CRUD tipado por su DTO
pub struct RestResource<T> {
    client: RestApiClient,
    path: &'static str,
    _dto: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path,
            _dto: PhantomData,
        }
    }
}

impl<T> RestResource<T> {
    fn item_url(&self, id: i64) -> String {
        self.client.url(&format!("{}/{}", self.path, id))
    }
}

#[async_trait]
impl<T> EntityClient<T> for RestResource<T>
where
    T: Serialize + Send + Sync,
{
    async fn list(&self) -> ClientResult<Value> {
        self.client.get_json(self.path).await
    }

    async fn get_by_id(&self, id: i64) -> ClientResult<Value> {
        let request = self.client.client.get(self.item_url(id));
        self.client.send(request).await
    }

    async fn create(&self, dto: &T) -> ClientResult<Value> {
        let request = self.client.client.post(self.client.url(self.path)).json(dto);
        self.client.send(request).await
    }

    async fn update(&self, id: i64, dto: &T) -> ClientResult<Value> {
        let request = self.client.client.put(self.item_url(id)).json(dto);
        self.client.send(request).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self.client.client.delete(self.item_url(id));
        self.client.send(request).await.map(|_| ())
    }
}

#[async_trait]
impl ReservationClient for RestResource<ReservationDto> {
    async fn change_status(&self, id: i64, status: &str) -> ClientResult<()> {
        let url = self.client.url(&format!("{}/{}/estado/{}", self.path, id, status));
        self.client.send(self.client.client.patch(url)).await.map(|_| ())
    }
}

#[async_trait]
impl ReferenceDataClient for RestApiClient {
    async fn categories(&self) -> ClientResult<Value> {
        self.get_json("categoriasvehiculo").await
    }

    async fn transmissions(&self) -> ClientResult<Value> {
        self.get_json("categoriasvehiculo/transmisiones").await
    }

    async fn branches(&self) -> ClientResult<Value> {
        self.get_json("sucursales").await
    }

    async fn promotions(&self) -> ClientResult<Value> {
        self.get_json("promociones").await
    }
}
