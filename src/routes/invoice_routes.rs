use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::controllers::invoice_controller::InvoiceController;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::fields::record_from_form;

use super::{form_response, list_response, outcome_response};

#[derive(Debug, Deserialize)]
struct NewInvoiceQuery {
    #[serde(rename = "idReserva")]
    id_reserva: Option<String>,
}

pub fn create_invoice_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/nueva", get(new_invoice_form).post(create_invoice))
        .route("/:id/editar", get(edit_invoice_form).post(update_invoice))
        .route("/:id/eliminar", post(delete_invoice))
}

async fn list_invoices(State(state): State<AppState>) -> Response {
    let controller = InvoiceController::new(state.clients.clone());
    list_response(controller.list().await)
}

async fn new_invoice_form(
    State(state): State<AppState>,
    Query(query): Query<NewInvoiceQuery>,
) -> AppResult<Response> {
    let controller = InvoiceController::new(state.clients.clone());
    let view = controller.new_form(query.id_reserva.as_deref()).await?;
    Ok(form_response(view))
}

async fn create_invoice(State(state): State<AppState>, Form(fields): Form<HashMap<String, String>>) -> Response {
    let controller = InvoiceController::new(state.clients.clone());
    let outcome = controller.create(&record_from_form(fields)).await;
    outcome_response(outcome, "Factura creada exitosamente")
}

async fn edit_invoice_form(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    let controller = InvoiceController::new(state.clients.clone());
    Ok(form_response(controller.edit_form(id).await?))
}

async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = InvoiceController::new(state.clients.clone());
    let outcome = controller.update(id, &record_from_form(fields)).await;
    outcome_response(outcome, "Factura actualizada exitosamente")
}

async fn delete_invoice(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let controller = InvoiceController::new(state.clients.clone());
    controller.delete(id).await;
    Redirect::to("/admin/facturas")
}
