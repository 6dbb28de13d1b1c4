use serde_json::Value;
use tracing::{error, info, warn};

use crate::clients::ApiClients;
use crate::dto::{ReservationDto, ReservationStatus};
use crate::mappers::FromRecord;
use crate::normalizers::{normalize_entity, normalize_list, Resource};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::Record;

use super::lists::ReservationLists;
use super::{fetch_error, submit, FormOutcome, FormView, ListView, Operation};

pub const TITLE_LIST: &str = "Reservas";
pub const TITLE_CREATE: &str = "Crear reserva";
pub const TITLE_EDIT: &str = "Editar reserva";

pub const MSG_LIST_FAILED: &str = "No se pudo cargar la lista de reservas.";
pub const MSG_CREATE_FAILED: &str = "Ocurrió un error al crear la reserva.";
pub const MSG_UPDATE_FAILED: &str = "Ocurrió un error al actualizar la reserva.";

pub type ReservationForm = FormView<ReservationDto, ReservationLists>;

pub struct ReservationController {
    clients: ApiClients,
}

impl ReservationController {
    pub fn new(clients: ApiClients) -> Self {
        Self { clients }
    }

    pub async fn list(&self) -> ListView<Value> {
        match self.clients.reservations.list().await {
            Ok(payload) => ListView::loaded(TITLE_LIST, normalize_list(&payload, Resource::Reservations)),
            Err(e) => {
                error!("❌ Error al obtener reservas: {}", e);
                ListView::failed(TITLE_LIST, MSG_LIST_FAILED)
            }
        }
    }

    pub async fn new_form(&self) -> AppResult<ReservationForm> {
        let lists = ReservationLists::load(&self.clients).await?;
        let dto = ReservationDto::from_record(&Record::new(), None);
        Ok(FormView::blank(TITLE_CREATE, dto, lists))
    }

    pub async fn create(&self, record: &Record) -> FormOutcome<ReservationDto, ReservationLists> {
        let dto = ReservationDto::from_record(record, None);
        submit(
            self.clients.reservations.as_ref(),
            Operation::Create,
            TITLE_CREATE,
            dto,
            ReservationLists::reload(&self.clients),
            |_| MSG_CREATE_FAILED.to_string(),
        )
        .await
    }

    pub async fn edit_form(&self, id: i64) -> AppResult<ReservationForm> {
        let payload = self
            .clients
            .reservations
            .get_by_id(id)
            .await
            .map_err(|e| fetch_error(e, "Reserva", id))?;

        let dto = normalize_entity::<ReservationDto>(&payload, Some(id))
            .ok_or_else(|| not_found_error("Reserva", id))?;

        let lists = ReservationLists::load(&self.clients).await?;
        Ok(FormView::blank(TITLE_EDIT, dto, lists))
    }

    pub async fn update(&self, id: i64, record: &Record) -> FormOutcome<ReservationDto, ReservationLists> {
        let dto = ReservationDto::from_record(record, Some(id));
        submit(
            self.clients.reservations.as_ref(),
            Operation::Update(id),
            TITLE_EDIT,
            dto,
            ReservationLists::reload(&self.clients),
            |_| MSG_UPDATE_FAILED.to_string(),
        )
        .await
    }

    pub async fn delete(&self, id: i64) {
        if let Err(e) = self.clients.reservations.delete(id).await {
            error!("❌ Error al eliminar reserva {}: {}", id, e.upstream_message());
        }
    }

    /// Cambia el estado con su valor canónico. Un estado desconocido no se
    /// envía a la API; ningún fallo interrumpe la petición.
    pub async fn change_status(&self, id: i64, raw_status: &str) {
        let estado = ReservationStatus::normalize(raw_status);
        if raw_status.trim().is_empty() || ReservationStatus::parse(&estado).is_none() {
            warn!("⚠️ Estado de reserva desconocido '{}' para la reserva {}", raw_status, id);
            return;
        }

        match self.clients.reservations.change_status(id, &estado).await {
            Ok(()) => info!("✅ Reserva {} cambiada a {}", id, estado),
            Err(e) => error!("❌ Error al cambiar estado de reserva {}: {}", id, e.upstream_message()),
        }
    }
}
