//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay estado mutable entre peticiones: solo
//! configuración y los colaboradores de la API de gestión.

use crate::clients::{ApiClients, ClientResult, RestApiClient};
use crate::config::environment::EnvironmentConfig;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub clients: ApiClients,
    pub jwt: JwtConfig,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, clients: ApiClients) -> Self {
        let jwt = JwtConfig::from(&config);
        Self {
            config,
            clients,
            jwt,
        }
    }

    /// Estado con los clientes REST construidos desde la configuración
    pub fn from_config(config: EnvironmentConfig) -> ClientResult<Self> {
        let rest = RestApiClient::from_config(&config)?;
        Ok(Self::new(config, ApiClients::rest(&rest)))
    }
}
