//! Controladores del panel de administración
//!
//! Orquestan cada petición: mapean el formulario al DTO, lo validan, lo
//! envían a la API de gestión y preparan los datos de la vista. Ninguna ruta
//! pierde lo que el usuario escribió: ante un rechazo el DTO vuelve completo
//! junto con los mensajes y las listas de referencia.

pub mod auth_controller;
pub mod invoice_controller;
pub mod lists;
pub mod reservation_controller;
pub mod user_controller;
pub mod vehicle_controller;

use std::future::Future;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::{debug, error};

use crate::clients::{ClientError, EntityClient};
use crate::utils::errors::{not_found_error, AppError};
use crate::validators::Violations;

/// Motivo por el que se vuelve a mostrar un formulario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// Violaciones de reglas de negocio
    Invalid,
    /// La API de gestión rechazó o no respondió
    Upstream,
}

impl RejectReason {
    pub fn status(self) -> StatusCode {
        match self {
            RejectReason::Invalid => StatusCode::BAD_REQUEST,
            RejectReason::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Datos de un formulario: lo capturado, los errores y las listas de apoyo
#[derive(Debug, Serialize)]
pub struct FormView<T, L> {
    pub title: &'static str,
    pub dto: T,
    pub errors: Vec<String>,
    pub lists: L,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl<T, L> FormView<T, L> {
    /// Formulario mostrado por primera vez
    pub fn blank(title: &'static str, dto: T, lists: L) -> Self {
        Self {
            title,
            dto,
            errors: Vec::new(),
            lists,
            reason: None,
        }
    }

    pub fn rejected(title: &'static str, dto: T, errors: Vec<String>, lists: L, reason: RejectReason) -> Self {
        Self {
            title,
            dto,
            errors,
            lists,
            reason: Some(reason),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.reason.map(RejectReason::status).unwrap_or(StatusCode::OK)
    }

    /// Misma vista con el DTO proyectado (por ejemplo, sin datos sensibles)
    pub fn map_dto<U>(self, project: impl FnOnce(T) -> U) -> FormView<U, L> {
        FormView {
            title: self.title,
            dto: project(self.dto),
            errors: self.errors,
            lists: self.lists,
            reason: self.reason,
        }
    }
}

/// Resultado de enviar un formulario
#[derive(Debug)]
pub enum FormOutcome<T, L, S = T> {
    Saved(S),
    Rejected(FormView<T, L>),
}

impl<T, L> FormOutcome<T, L> {
    /// Proyecta el DTO guardado y el del formulario rechazado
    pub fn map_dto<U>(self, project: impl Fn(T) -> U) -> FormOutcome<U, L> {
        match self {
            FormOutcome::Saved(dto) => FormOutcome::Saved(project(dto)),
            FormOutcome::Rejected(view) => FormOutcome::Rejected(view.map_dto(project)),
        }
    }
}

/// Listado con el mensaje de error cuando no se pudo cargar
#[derive(Debug, Serialize)]
pub struct ListView<T> {
    pub title: &'static str,
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ListView<T> {
    pub fn loaded(title: &'static str, items: Vec<T>) -> Self {
        Self {
            title,
            items,
            error: None,
        }
    }

    pub fn failed(title: &'static str, message: &str) -> Self {
        Self {
            title,
            items: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update(i64),
}

/// Valida y envía un DTO a la API.
///
/// Las listas de `reload` solo se esperan cuando hay que volver a mostrar el
/// formulario; deben tolerar fallos para no ocultar el error principal.
pub(crate) async fn submit<C, T, L, R>(
    client: &C,
    operation: Operation,
    title: &'static str,
    dto: T,
    reload: R,
    failure_message: impl FnOnce(&ClientError) -> String,
) -> FormOutcome<T, L>
where
    C: EntityClient<T> + ?Sized,
    T: Violations + Serialize + Send + Sync,
    R: Future<Output = L>,
{
    let errors = dto.violations();
    if !errors.is_empty() {
        debug!("⚠️ {}: {} regla(s) incumplida(s)", title, errors.len());
        let lists = reload.await;
        return FormOutcome::Rejected(FormView::rejected(title, dto, errors, lists, RejectReason::Invalid));
    }

    let result = match operation {
        Operation::Create => client.create(&dto).await,
        Operation::Update(id) => client.update(id, &dto).await,
    };

    match result {
        Ok(_) => {
            debug!("✅ {}: aceptado por la API de gestión", title);
            FormOutcome::Saved(dto)
        }
        Err(e) => {
            error!("❌ {}: {}", title, e.upstream_message());
            let message = failure_message(&e);
            let lists = reload.await;
            FormOutcome::Rejected(FormView::rejected(title, dto, vec![message], lists, RejectReason::Upstream))
        }
    }
}

/// Error al traer un registro por id; 404 de la API → `NotFound`
pub(crate) fn fetch_error(error: ClientError, resource: &str, id: i64) -> AppError {
    if error.is_not_found() {
        not_found_error(resource, id)
    } else {
        AppError::ExternalApi(error)
    }
}
