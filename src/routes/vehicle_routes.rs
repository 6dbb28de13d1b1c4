use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::fields::record_from_form;

use super::{form_response, list_response, outcome_response};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/nuevo", get(new_vehicle_form).post(create_vehicle))
        .route("/:id/editar", get(edit_vehicle_form).post(update_vehicle))
        .route("/:id/eliminar", post(delete_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Response {
    let controller = VehicleController::new(state.clients.clone());
    list_response(controller.list().await)
}

async fn new_vehicle_form(State(state): State<AppState>) -> AppResult<Response> {
    let controller = VehicleController::new(state.clients.clone());
    Ok(form_response(controller.new_form().await?))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = VehicleController::new(state.clients.clone());
    let outcome = controller.create(&record_from_form(fields)).await;
    outcome_response(outcome, "Vehículo creado exitosamente")
}

async fn edit_vehicle_form(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    let controller = VehicleController::new(state.clients.clone());
    Ok(form_response(controller.edit_form(id).await?))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = VehicleController::new(state.clients.clone());
    let outcome = controller.update(id, &record_from_form(fields)).await;
    outcome_response(outcome, "Vehículo actualizado exitosamente")
}

async fn delete_vehicle(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let controller = VehicleController::new(state.clients.clone());
    controller.delete(id).await;
    Redirect::to("/admin/vehiculos")
}
