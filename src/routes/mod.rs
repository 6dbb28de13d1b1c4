//! Rutas HTTP
//!
//! Réplica de las rutas de la consola: `/admin/...` protegidas por rol,
//! `/login` y `/registro` públicas. Los formularios llegan como
//! `application/x-www-form-urlencoded` y cada vista se devuelve como un
//! `ApiResponse` JSON.

pub mod auth_routes;
pub mod invoice_routes;
pub mod reservation_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::controllers::{FormOutcome, FormView, ListView, RejectReason};
use crate::dto::ApiResponse;
use crate::middleware::{cors_middleware, require_admin};
use crate::state::AppState;
use crate::utils::jwt::JwtClaims;

pub const MSG_INVALID_FORM: &str = "Los datos enviados no son válidos";
pub const MSG_UPSTREAM_FAILED: &str = "No se pudo completar la operación en la API de gestión";

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/", get(dashboard))
        .nest("/vehiculos", vehicle_routes::create_vehicle_router())
        .nest("/usuarios", user_routes::create_user_router())
        .nest("/reservas", reservation_routes::create_reservation_router())
        .nest("/facturas", invoice_routes::create_invoice_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes::create_auth_router())
        .nest("/admin", admin)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_middleware(&state.config)),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "urbandrive-admin",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn dashboard(Extension(claims): Extension<JwtClaims>) -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({
        "title": "Panel de administración",
        "usuario": claims.email,
        "secciones": ["/admin/vehiculos", "/admin/usuarios", "/admin/reservas", "/admin/facturas"],
    })))
}

/// Listado; si no se pudo cargar, `success` es falso y el mensaje explica por qué
pub(crate) fn list_response<T: Serialize>(view: ListView<T>) -> Response {
    let body = match view.error.clone() {
        Some(message) => ApiResponse::failure_with_data(view, message),
        None => ApiResponse::success(view),
    };
    Json(body).into_response()
}

pub(crate) fn form_response<T: Serialize, L: Serialize>(view: FormView<T, L>) -> Response {
    (view.status(), Json(ApiResponse::success(view))).into_response()
}

/// `Saved` → 200 con el mensaje; `Rejected` → 400/500 con el formulario
/// completo para volver a editarlo
pub(crate) fn outcome_response<T, L, S>(outcome: FormOutcome<T, L, S>, saved_message: &str) -> Response
where
    T: Serialize,
    L: Serialize,
    S: Serialize,
{
    match outcome {
        FormOutcome::Saved(data) => (
            StatusCode::OK,
            Json(ApiResponse::success_with_message(data, saved_message.to_string())),
        )
            .into_response(),
        FormOutcome::Rejected(view) => {
            let message = match view.reason {
                Some(RejectReason::Upstream) => MSG_UPSTREAM_FAILED,
                _ => MSG_INVALID_FORM,
            };
            (view.status(), Json(ApiResponse::failure_with_data(view, message.to_string()))).into_response()
        }
    }
}
