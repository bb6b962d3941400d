// ============================================================================
// MOCK AUTH - Backend simulado para la demo (sin servidor)
// ============================================================================
// Login/registro tras un retardo; el rol se decide por el email.
// ============================================================================

use async_trait::async_trait;
use crate::errors::AuthError;
use crate::models::{AuthResponse, Credential, RegisterRequest, Role, UserRecord};
use crate::services::auth_service::AuthApi;
use crate::utils::{DEFAULT_LOGIN_DELAY_MS, MOCK_TOKEN_PREFIX};

const MOCK_USER_ID: &str = "123";

#[derive(Clone)]
pub struct MockAuthApi {
    delay_ms: u32,
}

impl MockAuthApi {
    /// `delay_ms = 0` responde sin pasar por el timer del navegador
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    async fn simulate_latency(&self) {
        if self.delay_ms > 0 {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
    }
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY_MS)
    }
}

/// Regla de demo: cualquier email que contenga "admin" es administrador
pub fn role_for_email(email: &str) -> Role {
    if email.contains("admin") {
        Role::Admin
    } else {
        Role::User
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn issue_token() -> String {
    format!("{}{}", MOCK_TOKEN_PREFIX, chrono::Utc::now().timestamp_millis())
}

fn respond(email: &str, name: &str) -> AuthResponse {
    AuthResponse {
        token: issue_token(),
        user: UserRecord {
            id: MOCK_USER_ID.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: role_for_email(email),
        },
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn login(&self, credential: &Credential) -> Result<AuthResponse, AuthError> {
        self.simulate_latency().await;
        let response = respond(&credential.email, local_part(&credential.email));
        log::info!(
            "🎭 [MOCK] Login simulado: {} ({})",
            response.user.email,
            response.user.role
        );
        Ok(response)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.simulate_latency().await;
        let response = respond(&request.email, &request.name);
        log::info!("🎭 [MOCK] Registro simulado: {}", response.user.email);
        Ok(response)
    }

    async fn validate_token(&self, token: &str) -> bool {
        self.simulate_latency().await;
        token.starts_with(MOCK_TOKEN_PREFIX)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.simulate_latency().await;
        log::info!("🎭 [MOCK] Recuperación de contraseña solicitada para {}", email);
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<(), AuthError> {
        self.simulate_latency().await;
        log::info!("🎭 [MOCK] Contraseña restablecida");
        Ok(())
    }
}
