// ============================================================================
// AUTH SERVICE - Comunicación con la API de autenticación
// ============================================================================
// `AuthApi` es SOLO red (stateless). `AuthService` lo combina con el
// SessionStore para las operaciones locales (logout, header, etc.).
// ============================================================================

use std::collections::HashMap;
use std::rc::Rc;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use crate::errors::AuthError;
use crate::models::{
    ApiMessage, AuthResponse, Credential, ForgotPasswordRequest, RegisterRequest,
    ResetPasswordRequest,
};
use crate::services::session_store::SessionStore;
use crate::utils::KeyValueStore;

/// Operaciones de red de autenticación. Una llamada por invocación, sin reintentos.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credential: &Credential) -> Result<AuthResponse, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;

    /// `false` ante cualquier no-2xx o error de transporte
    async fn validate_token(&self, token: &str) -> bool;

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError>;
}

/// Cliente HTTP real (`{base}/auth/...`)
#[derive(Clone)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/{}", self.base_url, path)
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<Response, AuthError> {
        Request::post(&self.url(path))
            .json(body)
            .map_err(|e| AuthError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))
    }

    async fn parse_auth_response(response: Response) -> Result<AuthResponse, AuthError> {
        if !response.ok() {
            log::warn!("⚠️ [AUTH] HTTP {} {}", response.status(), response.status_text());
        }
        auth_status(response.ok())?;
        decode_auth(response.json::<AuthResponse>().await)
    }

    async fn expect_success(response: Response, fallback: &str) -> Result<(), AuthError> {
        if response.ok() {
            return Ok(());
        }
        let body = response.json::<ApiMessage>().await.ok();
        Err(rejection(body, fallback))
    }
}

/// Login/registro: cualquier no-2xx son credenciales inválidas
fn auth_status(ok: bool) -> Result<(), AuthError> {
    if ok {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Cuerpo 2xx ilegible = error de red
fn decode_auth<E: std::fmt::Display>(parsed: Result<AuthResponse, E>) -> Result<AuthResponse, AuthError> {
    parsed.map_err(|e| AuthError::Network(format!("Parse error: {}", e)))
}

/// Motivo enviado por el servidor o el mensaje genérico
fn rejection(body: Option<ApiMessage>, fallback: &str) -> AuthError {
    let message = body
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    AuthError::ServerRejected { message }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credential: &Credential) -> Result<AuthResponse, AuthError> {
        log::info!("🔐 [AUTH] POST /auth/login ({})", credential.email);
        let response = self.post_json("login", credential).await?;
        Self::parse_auth_response(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        log::info!("📝 [AUTH] POST /auth/register ({})", request.email);
        let response = self.post_json("register", request).await?;
        Self::parse_auth_response(response).await
    }

    async fn validate_token(&self, token: &str) -> bool {
        let result = Request::get(&self.url("validate"))
            .header("Authorization", &bearer(token))
            .send()
            .await;

        match result {
            Ok(response) => response.ok(),
            Err(e) => {
                log::error!("❌ [AUTH] Error validando token: {}", e);
                false
            }
        }
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let response = self.post_json("forgot-password", &body).await?;
        Self::expect_success(response, "Erro ao solicitar recuperação de senha").await
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            password: new_password.to_string(),
        };
        let response = self.post_json("reset-password", &body).await?;
        Self::expect_success(response, "Erro ao resetar senha").await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Fachada: API de red + SessionStore
#[derive(Clone)]
pub struct AuthService<S: KeyValueStore> {
    store: SessionStore<S>,
    api: Rc<dyn AuthApi>,
}

impl<S: KeyValueStore> AuthService<S> {
    pub fn new(store: SessionStore<S>, api: Rc<dyn AuthApi>) -> Self {
        Self { store, api }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    /// Login contra la API. No escribe en el storage: eso lo hace la máquina
    /// de sesión una vez comprobado que la respuesta sigue siendo relevante.
    pub async fn login(&self, credential: &Credential) -> Result<AuthResponse, AuthError> {
        self.api.login(credential).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.api.register(request).await
    }

    /// Solo local: no hay invalidación en servidor
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
        }
    }

    /// Hay token + usuario válidos en el storage (sin red, puede estar desfasado)
    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    pub fn get_auth_header(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        if let Some(token) = self.store.token() {
            headers.insert("Authorization".to_string(), bearer(&token));
        }
        headers
    }

    /// Comprobación consultiva: sin token ni siquiera se llama a la red
    pub async fn validate_token(&self) -> bool {
        match self.store.token() {
            Some(token) => self.api.validate_token(&token).await,
            None => false,
        }
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        self.api.forgot_password(email).await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        self.api.reset_password(token, new_password).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! `AuthApi` falso que cuenta llamadas, para tests sin red

    use super::*;
    use std::cell::{Cell, RefCell};
    use crate::models::{Role, UserRecord};

    #[derive(Default)]
    pub struct FakeAuthApi {
        pub calls: Cell<usize>,
        pub fail_with: RefCell<Option<AuthError>>,
        pub token_valid: Cell<bool>,
    }

    impl FakeAuthApi {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn failing(err: AuthError) -> Rc<Self> {
            let api = Self::default();
            *api.fail_with.borrow_mut() = Some(err);
            Rc::new(api)
        }

        fn record(&self) -> Result<(), AuthError> {
            self.calls.set(self.calls.get() + 1);
            match self.fail_with.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        /// Cuenta la llamada y cede una vez, como haría una petición real
        async fn step(&self) -> Result<(), AuthError> {
            let result = self.record();
            tokio::task::yield_now().await;
            result
        }

        fn response(email: &str, name: &str) -> AuthResponse {
            AuthResponse {
                token: format!("tok-{}", email),
                user: UserRecord {
                    id: "1".into(),
                    email: email.into(),
                    name: name.into(),
                    role: if email.starts_with("admin") { Role::Admin } else { Role::User },
                },
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthApi for FakeAuthApi {
        async fn login(&self, credential: &Credential) -> Result<AuthResponse, AuthError> {
            self.step().await?;
            Ok(Self::response(&credential.email, "fake"))
        }

        async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
            self.step().await?;
            Ok(Self::response(&request.email, &request.name))
        }

        async fn validate_token(&self, _token: &str) -> bool {
            self.step().await.is_ok() && self.token_valid.get()
        }

        async fn forgot_password(&self, _email: &str) -> Result<(), AuthError> {
            self.step().await
        }

        async fn reset_password(&self, _token: &str, _new_password: &str) -> Result<(), AuthError> {
            self.step().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeAuthApi;
    use super::*;
    use crate::models::{Role, UserRecord};
    use crate::utils::MemoryStorage;

    fn service(api: Rc<FakeAuthApi>) -> AuthService<MemoryStorage> {
        AuthService::new(SessionStore::new(MemoryStorage::new()), api)
    }

    fn user() -> UserRecord {
        UserRecord {
            id: "1".into(),
            email: "bob@x.com".into(),
            name: "bob".into(),
            role: Role::User,
        }
    }

    #[test]
    fn auth_header_is_empty_without_token() {
        let svc = service(FakeAuthApi::new());
        assert!(svc.get_auth_header().is_empty());
        assert!(!svc.is_authenticated());
    }

    #[test]
    fn auth_header_carries_bearer_token() {
        let svc = service(FakeAuthApi::new());
        svc.store().save("abc", &user()).unwrap();

        let headers = svc.get_auth_header();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Authorization"], "Bearer abc");
        assert!(svc.is_authenticated());
    }

    #[test]
    fn logout_clears_token_and_user() {
        let svc = service(FakeAuthApi::new());
        svc.store().save("abc", &user()).unwrap();
        svc.logout();

        assert!(!svc.is_authenticated());
        assert_eq!(svc.store().load().user, None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn corrupt_user_record_leaves_no_live_token() {
        let api = FakeAuthApi::new();
        let svc = service(api.clone());
        svc.store().backend().set("auth_token", "tok-1").unwrap();
        svc.store().backend().set("user_data", "{not json").unwrap();

        assert!(!svc.is_authenticated());
        assert!(svc.get_auth_header().is_empty());
        assert!(!svc.validate_token().await);
        assert_eq!(api.calls.get(), 0);
        assert_eq!(svc.store().backend().get("auth_token").unwrap(), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn validate_token_skips_network_without_token() {
        let api = FakeAuthApi::new();
        let svc = service(api.clone());

        assert!(!svc.validate_token().await);
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn validate_token_swallows_network_failure() {
        let api = FakeAuthApi::failing(AuthError::Network("offline".into()));
        api.token_valid.set(true);
        let svc = service(api.clone());
        svc.store().save("abc", &user()).unwrap();

        assert!(!svc.validate_token().await);
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn login_does_not_touch_the_store() {
        let svc = service(FakeAuthApi::new());
        let response = svc.login(&Credential::new("bob@x.com", "pw")).await.unwrap();

        assert_eq!(response.user.email, "bob@x.com");
        assert!(!svc.is_authenticated());
    }

    fn rejected(message: &str) -> AuthError {
        AuthError::ServerRejected {
            message: message.to_string(),
        }
    }

    #[test]
    fn non_2xx_on_login_or_register_is_invalid_credentials() {
        assert_eq!(auth_status(true), Ok(()));
        assert_eq!(auth_status(false), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn unreadable_auth_body_is_a_network_error() {
        let parsed = serde_json::from_str::<AuthResponse>("{\"token\":\"t\"}");
        match decode_auth(parsed) {
            Err(AuthError::Network(msg)) => assert!(msg.starts_with("Parse error")),
            other => panic!("unexpected: {:?}", other),
        }

        let body = r#"{"token":"t","user":{"id":"1","email":"a@x.com","name":"a","role":"admin"}}"#;
        let response = decode_auth(serde_json::from_str::<AuthResponse>(body)).unwrap();
        assert_eq!(response.token, "t");
        assert_eq!(response.user.role, Role::Admin);
    }

    #[test]
    fn rejection_prefers_server_reason() {
        let body = ApiMessage {
            message: Some("Email não encontrado".into()),
        };
        assert_eq!(rejection(Some(body), "genérico"), rejected("Email não encontrado"));
    }

    #[test]
    fn rejection_falls_back_without_usable_message() {
        // Cuerpo ilegible, sin campo `message` o en blanco
        assert_eq!(rejection(None, "genérico"), rejected("genérico"));
        assert_eq!(rejection(Some(ApiMessage::default()), "genérico"), rejected("genérico"));
        let blank = ApiMessage {
            message: Some("  ".into()),
        };
        assert_eq!(rejection(Some(blank), "genérico"), rejected("genérico"));
    }

    #[test]
    fn http_urls_are_built_from_the_base() {
        let api = HttpAuthApi::new("http://localhost:3000/api/");
        assert_eq!(api.url("login"), "http://localhost:3000/api/auth/login");
        assert_eq!(api.url("forgot-password"), "http://localhost:3000/api/auth/forgot-password");
    }
}
