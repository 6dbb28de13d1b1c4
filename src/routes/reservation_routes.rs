use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::controllers::reservation_controller::ReservationController;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::fields::record_from_form;

use super::{form_response, list_response, outcome_response};

#[derive(Debug, Deserialize)]
struct ChangeStatusForm {
    #[serde(rename = "nuevoEstado", default)]
    nuevo_estado: String,
}

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations))
        .route("/nueva", get(new_reservation_form).post(create_reservation))
        .route("/:id/editar", get(edit_reservation_form).post(update_reservation))
        .route("/:id/eliminar", post(delete_reservation))
        .route("/:id/cambiar-estado", post(change_reservation_status))
}

async fn list_reservations(State(state): State<AppState>) -> Response {
    let controller = ReservationController::new(state.clients.clone());
    list_response(controller.list().await)
}

async fn new_reservation_form(State(state): State<AppState>) -> AppResult<Response> {
    let controller = ReservationController::new(state.clients.clone());
    Ok(form_response(controller.new_form().await?))
}

async fn create_reservation(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = ReservationController::new(state.clients.clone());
    let outcome = controller.create(&record_from_form(fields)).await;
    outcome_response(outcome, "Reserva creada exitosamente")
}

async fn edit_reservation_form(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    let controller = ReservationController::new(state.clients.clone());
    Ok(form_response(controller.edit_form(id).await?))
}

async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = ReservationController::new(state.clients.clone());
    let outcome = controller.update(id, &record_from_form(fields)).await;
    outcome_response(outcome, "Reserva actualizada exitosamente")
}

async fn delete_reservation(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let controller = ReservationController::new(state.clients.clone());
    controller.delete(id).await;
    Redirect::to("/admin/reservas")
}

async fn change_reservation_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ChangeStatusForm>,
) -> Redirect {
    let controller = ReservationController::new(state.clients.clone());
    controller.change_status(id, &form.nuevo_estado).await;
    Redirect::to("/admin/reservas")
}
