use serde_json::Value;
use tracing::error;

use crate::clients::{ApiClients, ClientError};
use crate::dto::InvoiceDto;
use crate::mappers::invoice::aliases;
use crate::mappers::FromRecord;
use crate::normalizers::{decorate_invoices, normalize_entity, normalize_list, Resource};
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::Record;

use super::lists::InvoiceLists;
use super::{fetch_error, submit, FormOutcome, FormView, ListView, Operation};

pub const TITLE_LIST: &str = "Gestión de facturas";
pub const TITLE_CREATE: &str = "Crear factura";
pub const TITLE_EDIT: &str = "Editar factura";

pub const MSG_LIST_FAILED: &str = "No se pudieron cargar las facturas.";
pub const MSG_UPDATE_FAILED: &str = "Ocurrió un error al actualizar la factura.";

/// Condición que la API informa cuando la reserva aún no tiene pago
pub const PAYMENT_MISSING: &str = "No se ha registrado ningún pago";
pub const MSG_PAYMENT_MISSING: &str =
    "No se ha registrado ningún pago para esta reserva. Primero registra el pago y luego genera la factura.";

pub type InvoiceForm = FormView<InvoiceDto, InvoiceLists>;

/// Mensaje de la API para el administrador; la falta de pago se reescribe
/// en una instrucción concreta.
pub fn creation_failure_message(error: &ClientError) -> String {
    let message = error.upstream_message();
    if message.contains(PAYMENT_MISSING) {
        MSG_PAYMENT_MISSING.to_string()
    } else {
        message
    }
}

pub struct InvoiceController {
    clients: ApiClients,
}

impl InvoiceController {
    pub fn new(clients: ApiClients) -> Self {
        Self { clients }
    }

    /// Facturas con la etiqueta legible de su reserva
    pub async fn list(&self) -> ListView<Value> {
        let result = futures::try_join!(self.clients.invoices.list(), self.clients.reservations.list());

        match result {
            Ok((invoices, reservations)) => {
                let invoices = normalize_list(&invoices, Resource::Invoices);
                let reservations = normalize_list(&reservations, Resource::Reservations);
                ListView::loaded(TITLE_LIST, decorate_invoices(invoices, &reservations))
            }
            Err(e) => {
                error!("❌ Error al obtener facturas: {}", e);
                ListView::failed(TITLE_LIST, MSG_LIST_FAILED)
            }
        }
    }

    /// Formulario nuevo, con la reserva preseleccionada si llega en la URL
    pub async fn new_form(&self, id_reserva: Option<&str>) -> AppResult<InvoiceForm> {
        let lists = InvoiceLists::load(&self.clients).await?;

        let mut record = Record::new();
        if let Some(id_reserva) = id_reserva {
            record.insert(aliases::RESERVA.aliases[0].to_string(), Value::String(id_reserva.to_string()));
        }

        Ok(FormView::blank(TITLE_CREATE, InvoiceDto::from_record(&record, None), lists))
    }

    pub async fn create(&self, record: &Record) -> FormOutcome<InvoiceDto, InvoiceLists> {
        let dto = InvoiceDto::from_record(record, None);
        submit(
            self.clients.invoices.as_ref(),
            Operation::Create,
            TITLE_CREATE,
            dto,
            InvoiceLists::reload(&self.clients),
            creation_failure_message,
        )
        .await
    }

    pub async fn edit_form(&self, id: i64) -> AppResult<InvoiceForm> {
        let (payload, lists) = futures::join!(
            self.clients.invoices.get_by_id(id),
            InvoiceLists::load(&self.clients)
        );

        let payload = payload.map_err(|e| fetch_error(e, "Factura", id))?;
        let dto = normalize_entity::<InvoiceDto>(&payload, Some(id))
            .ok_or_else(|| not_found_error("Factura", id))?;

        Ok(FormView::blank(TITLE_EDIT, dto, lists?))
    }

    pub async fn update(&self, id: i64, record: &Record) -> FormOutcome<InvoiceDto, InvoiceLists> {
        let dto = InvoiceDto::from_record(record, Some(id));
        submit(
            self.clients.invoices.as_ref(),
            Operation::Update(id),
            TITLE_EDIT,
            dto,
            InvoiceLists::reload(&self.clients),
            |_| MSG_UPDATE_FAILED.to_string(),
        )
        .await
    }

    pub async fn delete(&self, id: i64) {
        if let Err(e) = self.clients.invoices.delete(id).await {
            error!("❌ Error al eliminar factura {}: {}", id, e.upstream_message());
        }
    }
}
