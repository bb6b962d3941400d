// ============================================================================
// ERRORS - Taxonomía de errores de la app
// ============================================================================
// Ningún error es fatal: lo peor que puede pasar es quedarse en el Login.
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Campo de formulario al que se refiere un error de validación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    /// Regla "todos los campos" (no apunta a un campo concreto)
    Form,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::Form => "form",
        };
        f.write_str(name)
    }
}

/// Error de validación local; nunca llega a la red
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errores del cliente de autenticación
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Respuesta no-2xx en login/registro
    #[error("Email ou senha inválidos")]
    InvalidCredentials,

    /// Respuesta no-2xx con motivo del servidor (o mensaje genérico)
    #[error("{message}")]
    ServerRejected { message: String },

    /// Fallo de transporte, timeout o respuesta ilegible
    #[error("Erro de conexão: {0}")]
    Network(String),
}

/// Errores del almacenamiento local. Se registran en el log, nunca se muestran.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,

    #[error("error escribiendo en storage: {0}")]
    Write(String),

    /// Registro de usuario mal formado; se trata como ausente
    #[error("registro corrupto: {0}")]
    Corrupt(String),
}

/// Resultado de un envío de formulario desde el ViewModel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Ya hay una petición en vuelo para este formulario
    #[error("Aguarde, a requisição anterior ainda está em andamento")]
    Busy,

    /// Login correcto en el servidor pero la sesión no se pudo guardar
    #[error("Não foi possível salvar a sessão. Tente novamente.")]
    SessionNotSaved,

    /// La respuesta llegó después de navegar o cerrar sesión; se descarta
    #[error("Resposta descartada")]
    Stale,
}
