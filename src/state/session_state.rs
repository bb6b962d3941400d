// ============================================================================
// SESSION STATE - Máquina de estados de sesión
// ============================================================================
// Booting -> { Unauthenticated, Authenticated(user, show_onboarding) }
// Cada transición escribe en el SessionStore y recalcula el estado completo
// desde el storage (nada de recargar la página).
// ============================================================================

use crate::errors::StorageError;
use crate::models::{AuthResponse, SessionState};
#[cfg(feature = "role-selector")]
use crate::models::Role;
use crate::services::SessionStore;
use crate::state::reactivity::ReactiveState;
use crate::utils::KeyValueStore;

#[derive(Clone)]
pub struct SessionMachine<S: KeyValueStore> {
    store: SessionStore<S>,
    state: ReactiveState<SessionState>,
}

impl<S: KeyValueStore> SessionMachine<S> {
    /// Estado inicial `Booting`; llamar a `start()` para leer el storage
    pub fn new(store: SessionStore<S>) -> Self {
        Self {
            store,
            state: ReactiveState::new(SessionState::Booting),
        }
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    /// Arranque de la app
    pub fn start(&self) -> SessionState {
        let state = self.refresh();
        match &state {
            SessionState::Authenticated { user, show_onboarding } => log::info!(
                "✅ [SESSION] Sesión restaurada: {} ({}), onboarding={}",
                user.email,
                user.role,
                show_onboarding
            ),
            _ => log::info!("ℹ️ [SESSION] Sin sesión guardada"),
        }
        state
    }

    /// Recalcular el estado desde el storage y notificar
    pub fn refresh(&self) -> SessionState {
        let state = SessionState::from_snapshot(&self.store.load());
        self.state.set(state.clone());
        state
    }

    /// Login o registro correcto. El flag de onboarding no se toca.
    pub fn complete_login(&self, response: &AuthResponse) -> Result<SessionState, StorageError> {
        let saved = self.store.save(&response.token, &response.user);
        let state = self.refresh();
        saved.map(|_| {
            log::info!("🔐 [SESSION] Login: {} ({})", response.user.email, response.user.role);
            state
        })
    }

    /// Cerrar el selector de rol. Solo cambia el flag, no la ruta.
    pub fn dismiss_onboarding(&self) -> Result<SessionState, StorageError> {
        if !self.state().is_authenticated() {
            log::warn!("⚠️ [SESSION] dismiss_onboarding sin sesión, ignorado");
            return Ok(self.state());
        }
        let marked = self.store.mark_onboarding_seen();
        let state = self.refresh();
        marked.map(|_| state)
    }

    pub fn logout(&self) -> Result<SessionState, StorageError> {
        if !self.state().is_authenticated() {
            log::warn!("⚠️ [SESSION] logout sin sesión, ignorado");
            return Ok(self.state());
        }
        let cleared = self.store.clear();
        let state = self.refresh();
        log::info!("👋 [SESSION] Logout");
        cleared.map(|_| state)
    }

    /// Solo demo: reescribir el rol del usuario guardado y recalcular
    #[cfg(feature = "role-selector")]
    pub fn override_role(&self, role: Role) -> Result<SessionState, StorageError> {
        let mut user = match self.state() {
            SessionState::Authenticated { user, .. } => user,
            _ => {
                log::warn!("⚠️ [SESSION] override_role sin sesión, ignorado");
                return Ok(self.state());
            }
        };
        user.role = role;
        let saved = self.store.save_user(&user);
        let state = self.refresh();
        log::info!("🎭 [SESSION] Rol cambiado a {}", role);
        saved.map(|_| state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::models::{Role, UserRecord};
    use crate::utils::MemoryStorage;

    fn machine() -> SessionMachine<MemoryStorage> {
        SessionMachine::new(SessionStore::new(MemoryStorage::new()))
    }

    fn response(email: &str, role: Role) -> AuthResponse {
        AuthResponse {
            token: "tok".into(),
            user: UserRecord {
                id: "1".into(),
                email: email.into(),
                name: "x".into(),
                role,
            },
        }
    }

    #[test]
    fn starts_booting_then_unauthenticated_on_empty_store() {
        let m = machine();
        assert_eq!(m.state(), SessionState::Booting);
        assert_eq!(m.start(), SessionState::Unauthenticated);
    }

    #[test]
    fn start_restores_persisted_session() {
        let m = machine();
        m.store().save("tok", &response("bob@x.com", Role::User).user).unwrap();

        let state = m.start();
        assert!(state.is_authenticated());
        assert!(state.show_onboarding());
    }

    #[test]
    fn corrupt_record_starts_clean_and_login_still_works() {
        let m = machine();
        m.store().backend().set("auth_token", "tok-1").unwrap();
        m.store().backend().set("user_data", "{not json").unwrap();

        assert_eq!(m.start(), SessionState::Unauthenticated);
        assert_eq!(m.store().token(), None);

        let state = m.complete_login(&response("bob@x.com", Role::User)).unwrap();
        assert!(state.is_authenticated());
        assert_eq!(m.store().token().as_deref(), Some("tok"));
    }

    #[test]
    fn login_shows_onboarding_until_dismissed() {
        let m = machine();
        m.start();

        let state = m.complete_login(&response("bob@x.com", Role::User)).unwrap();
        assert!(state.show_onboarding());

        let state = m.dismiss_onboarding().unwrap();
        assert!(state.is_authenticated());
        assert!(!state.show_onboarding());
    }

    #[test]
    fn onboarding_stays_dismissed_across_logins() {
        let m = machine();
        m.start();
        m.complete_login(&response("bob@x.com", Role::User)).unwrap();
        m.dismiss_onboarding().unwrap();
        m.dismiss_onboarding().unwrap();

        for _ in 0..3 {
            m.logout().unwrap();
            let state = m.complete_login(&response("carol@x.com", Role::User)).unwrap();
            assert!(!state.show_onboarding());
        }
    }

    #[test]
    fn logout_returns_to_unauthenticated() {
        let m = machine();
        m.complete_login(&response("bob@x.com", Role::User)).unwrap();

        assert_eq!(m.logout().unwrap(), SessionState::Unauthenticated);
        assert_eq!(m.store().load().token, None);
    }

    #[test]
    fn transitions_without_session_are_noops() {
        let m = machine();
        m.start();

        assert_eq!(m.logout().unwrap(), SessionState::Unauthenticated);
        assert_eq!(m.dismiss_onboarding().unwrap(), SessionState::Unauthenticated);
        assert!(!m.store().load().onboarding_seen);
    }

    #[test]
    fn every_transition_notifies_subscribers() {
        let m = machine();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            m.subscribe(move || hits.set(hits.get() + 1));
        }

        m.start();
        m.complete_login(&response("bob@x.com", Role::User)).unwrap();
        m.dismiss_onboarding().unwrap();
        m.logout().unwrap();
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn external_store_change_is_picked_up_by_refresh() {
        let m = machine();
        m.complete_login(&response("bob@x.com", Role::User)).unwrap();

        // Otra pestaña cerró la sesión
        m.store().clear().unwrap();
        assert_eq!(m.refresh(), SessionState::Unauthenticated);
    }

    #[cfg(feature = "role-selector")]
    #[test]
    fn role_override_keeps_onboarding_and_token() {
        let m = machine();
        m.complete_login(&response("bob@x.com", Role::User)).unwrap();

        let state = m.override_role(Role::Admin).unwrap();
        assert_eq!(state.user().map(|u| u.role), Some(Role::Admin));
        assert!(state.show_onboarding());
        assert_eq!(m.store().load().token.as_deref(), Some("tok"));
    }

    #[cfg(feature = "role-selector")]
    #[test]
    fn role_override_without_session_is_ignored() {
        let m = machine();
        m.start();
        assert_eq!(m.override_role(Role::Admin).unwrap(), SessionState::Unauthenticated);
        assert_eq!(m.store().load().user, None);
    }
}
