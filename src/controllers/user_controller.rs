//! Gestión de usuarios del panel.
//!
//! Las vistas solo exponen `UserSummary`: la contraseña viaja hacia la API de
//! gestión pero nunca vuelve al navegador. Al editar, dejar la contraseña en
//! blanco conserva la almacenada.

use std::future::ready;

use tracing::{error, warn};

use crate::clients::ApiClients;
use crate::dto::{UserDto, UserSummary};
use crate::mappers::FromRecord;
use crate::normalizers::{normalize_user, normalize_users};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::Record;

use super::{fetch_error, submit, FormOutcome, FormView, ListView, Operation};

pub const TITLE_LIST: &str = "Gestión de usuarios";
pub const TITLE_CREATE: &str = "Crear usuario";
pub const TITLE_EDIT: &str = "Editar usuario";

pub const MSG_LIST_FAILED: &str = "No se pudieron cargar los usuarios.";
pub const MSG_CREATE_FAILED: &str = "Ocurrió un error al crear el usuario en la API.";
pub const MSG_UPDATE_FAILED: &str = "Ocurrió un error al actualizar el usuario en la API.";

/// El formulario de usuario no tiene listas de referencia
pub type UserForm = FormView<UserSummary, ()>;
pub type UserOutcome = FormOutcome<UserSummary, ()>;

pub struct UserController {
    clients: ApiClients,
}

impl UserController {
    pub fn new(clients: ApiClients) -> Self {
        Self { clients }
    }

    pub async fn list(&self) -> ListView<UserSummary> {
        match self.clients.users.list().await {
            Ok(payload) => {
                let users = normalize_users(&payload).into_iter().map(UserSummary::from).collect();
                ListView::loaded(TITLE_LIST, users)
            }
            Err(e) => {
                error!("❌ Error al obtener usuarios: {}", e);
                ListView::failed(TITLE_LIST, MSG_LIST_FAILED)
            }
        }
    }

    pub fn new_form(&self) -> UserForm {
        let dto = UserDto::from_record(&Record::new(), None);
        FormView::blank(TITLE_CREATE, UserSummary::from(dto), ())
    }

    pub async fn create(&self, record: &Record) -> UserOutcome {
        let dto = UserDto::from_record(record, None);
        submit(
            self.clients.users.as_ref(),
            Operation::Create,
            TITLE_CREATE,
            dto,
            ready(()),
            |_| MSG_CREATE_FAILED.to_string(),
        )
        .await
        .map_dto(UserSummary::from)
    }

    pub async fn edit_form(&self, id: i64) -> AppResult<UserForm> {
        let payload = self
            .clients
            .users
            .get_by_id(id)
            .await
            .map_err(|e| fetch_error(e, "Usuario", id))?;

        let dto = normalize_user(&payload, id).ok_or_else(|| not_found_error("Usuario", id))?;
        Ok(FormView::blank(TITLE_EDIT, UserSummary::from(dto), ()))
    }

    pub async fn update(&self, id: i64, record: &Record) -> UserOutcome {
        let mut dto = UserDto::from_record(record, Some(id));
        if dto.contrasena.is_empty() {
            if let Some(stored) = self.stored_password(id).await {
                dto.contrasena = stored;
            }
        }

        submit(
            self.clients.users.as_ref(),
            Operation::Update(id),
            TITLE_EDIT,
            dto,
            ready(()),
            |_| MSG_UPDATE_FAILED.to_string(),
        )
        .await
        .map_dto(UserSummary::from)
    }

    pub async fn delete(&self, id: i64) {
        if let Err(e) = self.clients.users.delete(id).await {
            error!("❌ Error al eliminar usuario {}: {}", id, e.upstream_message());
        }
    }

    /// Contraseña actual en la API; sin ella la validación pedirá una nueva
    async fn stored_password(&self, id: i64) -> Option<String> {
        match self.clients.users.get_by_id(id).await {
            Ok(payload) => normalize_user(&payload, id)
                .map(|user| user.contrasena)
                .filter(|contrasena| !contrasena.is_empty()),
            Err(e) => {
                warn!("⚠️ No se pudo leer la contraseña actual del usuario {}: {}", id, e);
                None
            }
        }
    }
}
