//! Login y registro público contra la API de gestión.
//!
//! La API no expone un endpoint de autenticación: el login busca al usuario
//! en el listado y compara la contraseña tal como la almacena la API. El
//! resultado es un JWT con el rol, que reemplaza a la sesión del panel.

use tracing::{error, info, warn};

use crate::clients::ApiClients;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegistrationForm};
use crate::dto::{Role, UserDto};
use crate::normalizers::{normalize_entity, normalize_users};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::validators::Violations;

use super::{FormOutcome, FormView, RejectReason};

pub const TITLE_REGISTER: &str = "Crear cuenta";

pub const MSG_CREDENTIALS_REQUIRED: &str = "Debes ingresar correo y contraseña.";
pub const MSG_INVALID_CREDENTIALS: &str = "Email o contraseña incorrectos.";
pub const MSG_LOGIN_FAILED: &str = "Ocurrió un error al iniciar sesión. Inténtalo de nuevo.";
pub const MSG_REGISTER_FAILED: &str = "Ocurrió un error al registrar el usuario.";
pub const MSG_USER_NOT_CREATED: &str = "No se pudo crear el usuario en el servidor.";

pub const ADMIN_REDIRECT: &str = "/admin";
pub const DEFAULT_REDIRECT: &str = "/vehiculos";

/// Usuario cuyo email coincide sin distinguir mayúsculas y cuya contraseña
/// es idéntica
pub fn find_by_credentials<'a>(users: &'a [UserDto], email: &str, password: &str) -> Option<&'a UserDto> {
    let email = email.trim().to_lowercase();
    users
        .iter()
        .find(|user| user.email.to_lowercase() == email)
        .filter(|user| user.contrasena == password)
}

/// Solo rutas del propio sitio: empiezan con `/` y no con `//` ni `/\`
pub fn safe_return_url(url: Option<String>) -> Option<String> {
    url.map(|url| url.trim().to_string()).filter(|url| {
        url.starts_with('/') && !url.starts_with("//") && !url.contains('\\')
    })
}

pub struct AuthController {
    clients: ApiClients,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(clients: ApiClients, jwt: JwtConfig) -> Self {
        Self { clients, jwt }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::BadRequest(MSG_CREDENTIALS_REQUIRED.to_string()));
        }

        let payload = self.clients.users.list().await.map_err(|e| {
            error!("❌ Error en login: {}", e.upstream_message());
            AppError::ServiceUnavailable(MSG_LOGIN_FAILED.to_string())
        })?;

        let users = normalize_users(&payload);
        let user = find_by_credentials(&users, &request.email, &request.password).ok_or_else(|| {
            warn!("⚠️ Credenciales inválidas para {}", request.email);
            AppError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string())
        })?;

        let redirect = if Role::normalize(&user.rol) == Some(Role::Admin) {
            ADMIN_REDIRECT.to_string()
        } else {
            safe_return_url(request.return_url).unwrap_or_else(|| DEFAULT_REDIRECT.to_string())
        };

        info!("✅ Login de {} ({})", user.email, user.rol);
        self.session_for(user, redirect)
    }

    /// Registro público: valida el formulario, crea el usuario como
    /// `Cliente` e inicia su sesión.
    pub async fn register(&self, form: RegistrationForm) -> FormOutcome<RegistrationForm, (), LoginResponse> {
        let errors = form.violations();
        if !errors.is_empty() {
            return rejected(form, errors, RejectReason::Invalid);
        }

        let dto = UserDto::from(&form);
        let created = match self.clients.users.create(&dto).await {
            Ok(payload) => normalize_entity::<UserDto>(&payload, None),
            Err(e) => {
                error!("❌ Error registrando usuario: {}", e.upstream_message());
                return rejected(form, vec![MSG_REGISTER_FAILED.to_string()], RejectReason::Upstream);
            }
        };

        let Some(user) = created else {
            return rejected(form, vec![MSG_USER_NOT_CREATED.to_string()], RejectReason::Upstream);
        };

        match self.session_for(&user, DEFAULT_REDIRECT.to_string()) {
            Ok(session) => {
                info!("✅ Usuario registrado: {}", user.email);
                FormOutcome::Saved(session)
            }
            Err(e) => {
                error!("❌ Error generando sesión tras el registro: {}", e);
                rejected(form, vec![MSG_REGISTER_FAILED.to_string()], RejectReason::Upstream)
            }
        }
    }

    fn session_for(&self, user: &UserDto, redirect: String) -> AppResult<LoginResponse> {
        let token = generate_token(user.id_usuario.unwrap_or_default(), &user.email, &user.rol, &self.jwt)?;
        Ok(LoginResponse {
            token,
            rol: user.rol.clone(),
            redirect,
        })
    }
}

fn rejected(
    form: RegistrationForm,
    errors: Vec<String>,
    reason: RejectReason,
) -> FormOutcome<RegistrationForm, (), LoginResponse> {
    FormOutcome::Rejected(FormView::rejected(TITLE_REGISTER, form, errors, (), reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, contrasena: &str) -> UserDto {
        UserDto {
            id_usuario: Some(1),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: email.into(),
            contrasena: contrasena.into(),
            direccion: String::new(),
            pais: String::new(),
            edad: Some(30),
            tipo_identificacion: "CI".into(),
            identificacion: "1712345678".into(),
            rol: "Admin".into(),
        }
    }

    #[test]
    fn test_credentials_match() {
        let users = vec![user("Ana@Gmail.com", "1234")];
        assert!(find_by_credentials(&users, "ana@gmail.com", "1234").is_some());
        assert!(find_by_credentials(&users, " ANA@GMAIL.COM ", "1234").is_some());
        assert!(find_by_credentials(&users, "ana@gmail.com", "12345").is_none());
        assert!(find_by_credentials(&users, "otro@gmail.com", "1234").is_none());
    }

    #[test]
    fn test_return_url_stays_on_site() {
        let check = |url: &str| safe_return_url(Some(url.to_string()));
        assert_eq!(check("/reservas?id=3").as_deref(), Some("/reservas?id=3"));
        assert_eq!(check(" /vehiculos ").as_deref(), Some("/vehiculos"));
        assert_eq!(check("https://evil.example/login"), None);
        assert_eq!(check("//evil.example"), None);
        assert_eq!(check("/\\evil.example"), None);
        assert_eq!(check(""), None);
        assert_eq!(safe_return_url(None), None);
    }
}
