use serde_json::Value;
use thiserror::Error;

/// Fallos del colaborador HTTP
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error de red: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error HTTP: {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("Respuesta inválida: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Mensaje que explica el fallo: `ExceptionMessage` o `Message` del
    /// cuerpo de error de la API cuando existen, si no el propio error.
    pub fn upstream_message(&self) -> String {
        if let ClientError::Status { body: Some(body), .. } = self {
            let message = ["ExceptionMessage", "Message", "message"]
                .into_iter()
                .filter_map(|key| body.get(key).and_then(Value::as_str))
                .find(|text| !text.trim().is_empty());
            if let Some(message) = message {
                return message.to_string();
            }
        }
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_message_precedence() {
        let error = ClientError::Status {
            status: 500,
            body: Some(json!({ "Message": "Error general", "ExceptionMessage": "No se ha registrado ningún pago" })),
        };
        assert_eq!(error.upstream_message(), "No se ha registrado ningún pago");

        let error = ClientError::Status { status: 400, body: Some(json!({ "Message": "Datos inválidos" })) };
        assert_eq!(error.upstream_message(), "Datos inválidos");

        let error = ClientError::Status { status: 502, body: None };
        assert_eq!(error.upstream_message(), "Error HTTP: 502");
        assert!(!error.is_not_found());
    }
}
