pub mod session_store;
pub mod auth_service;
pub mod mock_auth;

pub use session_store::SessionStore;
pub use auth_service::{AuthApi, AuthService, HttpAuthApi};
pub use mock_auth::MockAuthApi;

use std::rc::Rc;
use crate::config::{AppConfig, AuthMode};

/// Elegir la implementación de `AuthApi` según la configuración
pub fn auth_api_from_config(config: &AppConfig) -> Rc<dyn AuthApi> {
    match config.auth_mode {
        AuthMode::Mock => {
            log::info!("🎭 Usando autenticación simulada ({} ms)", config.login_delay_ms);
            Rc::new(MockAuthApi::new(config.login_delay_ms))
        }
        AuthMode::Http => {
            log::info!("🌐 Usando API de autenticación: {}", config.api_url);
            Rc::new(HttpAuthApi::new(config.api_url.clone()))
        }
    }
}
