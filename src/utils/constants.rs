/// URL base de la API de autenticación
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000/api (por defecto)
/// - Producción: via API_URL env var (o .env, ver build.rs)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

// Claves de localStorage
pub const STORAGE_KEY_TOKEN: &str = "auth_token";
pub const STORAGE_KEY_USER: &str = "user_data";
pub const STORAGE_KEY_ROLE_SELECTOR_SEEN: &str = "has_seen_role_selector";

/// Retardo de la autenticación simulada (ms)
pub const DEFAULT_LOGIN_DELAY_MS: u32 = 1500;

/// Prefijo de los tokens emitidos por el backend simulado
pub const MOCK_TOKEN_PREFIX: &str = "fake-token-";
