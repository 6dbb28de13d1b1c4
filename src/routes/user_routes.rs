use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use crate::controllers::user_controller::UserController;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::fields::record_from_form;

use super::{form_response, list_response, outcome_response};

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/nuevo", get(new_user_form).post(create_user))
        .route("/:id/editar", get(edit_user_form).post(update_user))
        .route("/:id/eliminar", post(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Response {
    let controller = UserController::new(state.clients.clone());
    list_response(controller.list().await)
}

async fn new_user_form(State(state): State<AppState>) -> Response {
    let controller = UserController::new(state.clients.clone());
    form_response(controller.new_form())
}

async fn create_user(State(state): State<AppState>, Form(fields): Form<HashMap<String, String>>) -> Response {
    let controller = UserController::new(state.clients.clone());
    let outcome = controller.create(&record_from_form(fields)).await;
    outcome_response(outcome, "Usuario creado exitosamente")
}

async fn edit_user_form(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Response> {
    let controller = UserController::new(state.clients.clone());
    Ok(form_response(controller.edit_form(id).await?))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let controller = UserController::new(state.clients.clone());
    let outcome = controller.update(id, &record_from_form(fields)).await;
    outcome_response(outcome, "Usuario actualizado exitosamente")
}

async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let controller = UserController::new(state.clients.clone());
    controller.delete(id).await;
    Redirect::to("/admin/usuarios")
}
