use serde_json::Value;
use tracing::error;

use crate::clients::ApiClients;
use crate::dto::VehicleDto;
use crate::mappers::FromRecord;
use crate::normalizers::{normalize_entity, normalize_list, Resource};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::Record;

use super::lists::VehicleLists;
use super::{fetch_error, submit, FormOutcome, FormView, ListView, Operation};

pub const TITLE_LIST: &str = "Gestión de vehículos";
pub const TITLE_CREATE: &str = "Crear vehículo";
pub const TITLE_EDIT: &str = "Editar vehículo";

pub const MSG_LIST_FAILED: &str = "No se pudieron cargar los vehículos.";
pub const MSG_CREATE_FAILED: &str = "Ocurrió un error al crear el vehículo en la API.";
pub const MSG_UPDATE_FAILED: &str = "Ocurrió un error al actualizar el vehículo en la API.";

pub type VehicleForm = FormView<VehicleDto, VehicleLists>;

pub struct VehicleController {
    clients: ApiClients,
}

impl VehicleController {
    pub fn new(clients: ApiClients) -> Self {
        Self { clients }
    }

    pub async fn list(&self) -> ListView<Value> {
        match self.clients.vehicles.list().await {
            Ok(payload) => ListView::loaded(TITLE_LIST, normalize_list(&payload, Resource::Vehicles)),
            Err(e) => {
                error!("❌ Error al cargar vehículos para admin: {}", e);
                ListView::failed(TITLE_LIST, MSG_LIST_FAILED)
            }
        }
    }

    pub async fn new_form(&self) -> AppResult<VehicleForm> {
        let lists = VehicleLists::load(&self.clients).await?;
        let dto = VehicleDto::from_record(&Record::new(), None);
        Ok(FormView::blank(TITLE_CREATE, dto, lists))
    }

    pub async fn create(&self, record: &Record) -> FormOutcome<VehicleDto, VehicleLists> {
        let dto = VehicleDto::from_record(record, None);
        submit(
            self.clients.vehicles.as_ref(),
            Operation::Create,
            TITLE_CREATE,
            dto,
            VehicleLists::reload(&self.clients),
            |_| MSG_CREATE_FAILED.to_string(),
        )
        .await
    }

    pub async fn edit_form(&self, id: i64) -> AppResult<VehicleForm> {
        let payload = self
            .clients
            .vehicles
            .get_by_id(id)
            .await
            .map_err(|e| fetch_error(e, "Vehículo", id))?;

        let dto = normalize_entity::<VehicleDto>(&payload, Some(id))
            .ok_or_else(|| not_found_error("Vehículo", id))?;

        let lists = VehicleLists::load(&self.clients).await?;
        Ok(FormView::blank(TITLE_EDIT, dto, lists))
    }

    pub async fn update(&self, id: i64, record: &Record) -> FormOutcome<VehicleDto, VehicleLists> {
        let dto = VehicleDto::from_record(record, Some(id));
        submit(
            self.clients.vehicles.as_ref(),
            Operation::Update(id),
            TITLE_EDIT,
            dto,
            VehicleLists::reload(&self.clients),
            |_| MSG_UPDATE_FAILED.to_string(),
        )
        .await
    }

    /// El fallo solo se registra; la vista vuelve al listado igual
    pub async fn delete(&self, id: i64) {
        if let Err(e) = self.clients.vehicles.delete(id).await {
            error!("❌ Error al eliminar vehículo {}: {}", id, e.upstream_message());
        }
    }
}
