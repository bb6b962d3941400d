// ============================================================================
// AUTH VIEWMODEL - LÓGICA DE FORMULARIOS DE AUTENTICACIÓN
// ============================================================================
// Validación -> guarda anti doble-submit -> llamada de red -> comprobación
// de ticket -> transición de la máquina de sesión.
// Las vistas solo leen `status()` y llaman a estos métodos.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::errors::SubmitError;
use crate::models::{Credential, RegisterData, SessionState};
use crate::services::AuthService;
use crate::state::reactivity::ReactiveState;
use crate::state::session_state::SessionMachine;
use crate::utils::KeyValueStore;
use crate::viewmodels::validation::{
    validate_email, validate_login, validate_new_password, validate_register,
};

/// Estado visible del formulario activo
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    /// Hay una petición en vuelo: el botón de envío va deshabilitado
    pub submitting: bool,
    /// Último error para mostrar en línea
    pub error: Option<String>,
    /// Mensaje de éxito (p.ej. email de recuperación enviado)
    pub notice: Option<String>,
}

/// Generación a la que pertenece una petición en vuelo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone)]
pub struct AuthViewModel<S: KeyValueStore> {
    service: AuthService<S>,
    session: SessionMachine<S>,
    status: ReactiveState<FormStatus>,
    generation: Rc<Cell<u64>>,
}

impl<S: KeyValueStore> AuthViewModel<S> {
    pub fn new(service: AuthService<S>, session: SessionMachine<S>) -> Self {
        Self {
            service,
            session,
            status: ReactiveState::new(FormStatus::default()),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.get().submitting
    }

    pub fn error_message(&self) -> Option<String> {
        self.status.get().error
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.status.subscribe(callback);
    }

    /// Borrar error/aviso (el usuario empezó a escribir). No notifica: la
    /// vista quita el aviso del DOM y un re-render haría perder el foco.
    pub fn clear_messages(&self) {
        self.status.update_silently(|s| {
            s.error = None;
            s.notice = None;
        });
    }

    /// Navegación o logout: las respuestas pendientes dejan de ser relevantes
    pub fn invalidate_pending(&self) {
        self.generation.set(self.generation.get() + 1);
        self.status.set(FormStatus::default());
    }

    fn begin(&self) -> Result<Ticket, SubmitError> {
        if self.is_submitting() {
            log::warn!("⚠️ [AUTH] Envío ignorado: ya hay una petición en vuelo");
            return Err(SubmitError::Busy);
        }
        self.status.set(FormStatus {
            submitting: true,
            error: None,
            notice: None,
        });
        Ok(Ticket(self.generation.get()))
    }

    /// `false` si el ticket es de una generación anterior (respuesta obsoleta)
    fn finish(&self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation.get() {
            log::info!("🗑️ [AUTH] Respuesta obsoleta descartada");
            return false;
        }
        self.status.update(|s| s.submitting = false);
        true
    }

    fn fail(&self, err: SubmitError) -> SubmitError {
        log::error!("❌ [AUTH] {}", err);
        let message = err.to_string();
        self.status.update(|s| s.error = Some(message));
        err
    }

    fn fail_validation(&self, err: SubmitError) -> SubmitError {
        if self.is_submitting() {
            return err;
        }
        self.fail(err)
    }

    pub async fn login(&self, credential: Credential) -> Result<SessionState, SubmitError> {
        if let Err(e) = validate_login(&credential) {
            return Err(self.fail_validation(e.into()));
        }
        let ticket = self.begin()?;

        log::info!("🔐 [AUTH] Iniciando login para {}", credential.email);
        let result = self.service.login(&credential).await;

        if !self.finish(ticket) {
            return Err(SubmitError::Stale);
        }
        match result {
            Ok(response) => self.enter_session(&response),
            Err(e) => Err(self.fail(e.into())),
        }
    }

    pub async fn register(&self, data: RegisterData) -> Result<SessionState, SubmitError> {
        if let Err(e) = validate_register(&data) {
            return Err(self.fail_validation(e.into()));
        }
        let ticket = self.begin()?;

        log::info!("📝 [AUTH] Iniciando registro para {}", data.email);
        let result = self.service.register(&data.to_request()).await;

        if !self.finish(ticket) {
            return Err(SubmitError::Stale);
        }
        match result {
            Ok(response) => self.enter_session(&response),
            Err(e) => Err(self.fail(e.into())),
        }
    }

    pub async fn forgot_password(&self, email: String) -> Result<(), SubmitError> {
        if let Err(e) = validate_email(&email) {
            return Err(self.fail_validation(e.into()));
        }
        let ticket = self.begin()?;
        let result = self.service.forgot_password(&email).await;

        if !self.finish(ticket) {
            return Err(SubmitError::Stale);
        }
        match result {
            Ok(()) => {
                self.status.update(|s| {
                    s.notice = Some(format!("Enviamos as instruções para {}", email));
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    pub async fn reset_password(
        &self,
        token: String,
        password: String,
        confirmation: String,
    ) -> Result<(), SubmitError> {
        if let Err(e) = validate_new_password(&password, &confirmation) {
            return Err(self.fail_validation(e.into()));
        }
        let ticket = self.begin()?;
        let result = self.service.reset_password(&token, &password).await;

        if !self.finish(ticket) {
            return Err(SubmitError::Stale);
        }
        match result {
            Ok(()) => {
                self.status.update(|s| {
                    s.notice = Some("Senha alterada com sucesso".to_string());
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Logout local; invalida cualquier login que siga en vuelo
    pub fn logout(&self) -> SessionState {
        self.invalidate_pending();
        match self.session.logout() {
            Ok(state) => state,
            Err(e) => {
                log::error!("❌ [AUTH] Error limpiando sesión: {}", e);
                self.session.state()
            }
        }
    }

    /// Comprobación consultiva del token contra el servidor
    pub async fn validate_session(&self) -> bool {
        self.service.validate_token().await
    }

    fn enter_session(&self, response: &crate::models::AuthResponse) -> Result<SessionState, SubmitError> {
        self.session.complete_login(response).map_err(|e| {
            log::error!("❌ [AUTH] No se pudo guardar la sesión: {}", e);
            self.fail(SubmitError::SessionNotSaved)
        })
    }
}
