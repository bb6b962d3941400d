use serde::{Deserialize, Serialize};
use crate::utils::constants::{API_URL, DEFAULT_LOGIN_DELAY_MS};

/// Origen de la autenticación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Backend simulado (sin servidor)
    Mock,
    /// API real en `api_url`
    Http,
}

impl AuthMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Some(AuthMode::Mock),
            "http" | "api" => Some(AuthMode::Http),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub auth_mode: AuthMode,
    pub login_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            auth_mode: AuthMode::Mock,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "AUTH_MODE" => option_env!("AUTH_MODE"),
            "LOGIN_DELAY_MS" => option_env!("LOGIN_DELAY_MS"),
            _ => None,
        })
    }

    /// Valores ausentes o inválidos caen en el default
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: defaults.api_url,
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            auth_mode: lookup("AUTH_MODE")
                .and_then(AuthMode::parse)
                .unwrap_or(defaults.auth_mode),
            login_delay_ms: lookup("LOGIN_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.login_delay_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel para wasm_logger; `Error` si el logging está deshabilitado
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
