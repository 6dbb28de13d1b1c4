//! Middleware de autenticación JWT
//!
//! Protege el panel de administración: exige un token Bearer válido y que
//! su rol sea administrador. Los claims quedan en las extensions de la
//! request para los handlers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

pub const MSG_TOKEN_REQUIRED: &str = "Token de autorización requerido";
pub const MSG_FORBIDDEN: &str = "Acceso no autorizado";

/// Sin token → 401; token de un rol distinto de admin → 403
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(MSG_TOKEN_REQUIRED.to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt)?;

    if !claims.is_admin() {
        warn!("⚠️ {} intentó entrar al panel con rol '{}'", claims.email, claims.rol);
        return Err(AppError::Forbidden(MSG_FORBIDDEN.to_string()));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
