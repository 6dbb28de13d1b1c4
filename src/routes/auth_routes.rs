use axum::{
    extract::State,
    response::Response,
    routing::post,
    Form, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegistrationForm};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

use super::outcome_response;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/registro", post(register))
}

async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let controller = AuthController::new(state.clients.clone(), state.jwt.clone());
    let response = controller.login(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn register(State(state): State<AppState>, Form(form): Form<RegistrationForm>) -> Response {
    let controller = AuthController::new(state.clients.clone(), state.jwt.clone());
    let outcome = controller.register(form).await;
    outcome_response(outcome, "Cuenta creada exitosamente")
}
