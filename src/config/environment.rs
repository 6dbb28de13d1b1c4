//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables
//! tienen un valor por defecto razonable para desarrollo, salvo
//! `JWT_SECRET`, obligatoria en cualquier otro entorno.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// URL por defecto de la API de gestión
pub const DEFAULT_API_BASE_URL: &str = "http://urbandrivegestionrest.runasp.net/api/v1";

/// Errores al cargar la configuración
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("JWT_SECRET es obligatorio en el entorno '{0}'")]
    MissingJwtSecret(String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub api_base_url: String,
    pub api_timeout_secs: u64,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout_secs: 30,
            jwt_secret: "urbandrive-dev-secret".to_string(),
            jwt_expiration: 8 * 3600,
            cors_origins: Vec::new(),
        }
    }
}

/// Lee una variable numérica; si está mal formada se usa el valor por defecto
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("⚠️ {} tiene un valor inválido ('{}'), usando el valor por defecto", name, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Secreto de firma de los tokens. Solo en desarrollo se admite el valor
/// por defecto del repositorio.
fn resolve_jwt_secret(environment: &str, raw: Option<String>, default: String) -> Result<String, ConfigError> {
    match raw.filter(|secret| !secret.trim().is_empty()) {
        Some(secret) => Ok(secret),
        None if environment == "development" => {
            warn!("⚠️ JWT_SECRET no definido, se usa el secreto de desarrollo");
            Ok(default)
        }
        None => Err(ConfigError::MissingJwtSecret(environment.to_string())),
    }
}

impl EnvironmentConfig {
    /// Cargar configuración desde variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let jwt_secret = resolve_jwt_secret(&environment, env::var("JWT_SECRET").ok(), defaults.jwt_secret)?;

        Ok(Self {
            environment,
            port: parse_var("PORT", defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            api_base_url: env::var("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            api_timeout_secs: parse_var("API_TIMEOUT_SECS", defaults.api_timeout_secs),
            jwt_secret,
            jwt_expiration: parse_var("JWT_EXPIRATION", defaults.jwt_expiration),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
