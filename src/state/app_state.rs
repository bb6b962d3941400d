// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::SessionState;
#[cfg(feature = "role-selector")]
use crate::models::Role;
use crate::services::{AuthApi, AuthService, SessionStore};
use crate::state::reactivity::ReactiveState;
use crate::state::session_state::SessionMachine;
use crate::utils::{KeyValueStore, LocalStorage};
use crate::viewmodels::AuthViewModel;
use crate::views::router::{route, Route};

/// Pantalla del área no autenticada
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

/// Valores tecleados en los formularios; sobreviven a los re-renders
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDrafts {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState<S: KeyValueStore> {
    pub session: SessionMachine<S>,
    pub auth: AuthViewModel<S>,
    pub screen: ReactiveState<AuthScreen>,
    /// Sin notificaciones: teclear no provoca re-render
    pub drafts: Rc<RefCell<FormDrafts>>,
}

/// Estado sobre localStorage (navegador)
pub type BrowserAppState = AppState<LocalStorage>;

impl<S: KeyValueStore + Clone> AppState<S> {
    /// Crear nuevo estado de aplicación. El storage se comparte entre
    /// la máquina de sesión y el servicio de auth.
    pub fn new(backend: S, api: Rc<dyn AuthApi>) -> Self {
        let store = SessionStore::new(backend);
        let session = SessionMachine::new(store.clone());
        let service = AuthService::new(store, api);
        Self {
            auth: AuthViewModel::new(service, session.clone()),
            session,
            screen: ReactiveState::new(AuthScreen::Login),
            drafts: Rc::new(RefCell::new(FormDrafts::default())),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Leer el storage y salir de `Booting`
    pub fn start(&self) -> SessionState {
        self.session.start()
    }

    pub fn route(&self) -> Route {
        route(&self.session.state())
    }

    pub fn current_screen(&self) -> AuthScreen {
        self.screen.get()
    }

    /// Cambiar de formulario; descarta respuestas pendientes del anterior
    pub fn show_screen(&self, screen: AuthScreen) {
        if self.screen.get() == screen {
            return;
        }
        self.auth.invalidate_pending();
        self.screen.set(screen);
    }

    /// Vaciar contraseñas (tras login o logout); el email se conserva
    pub fn clear_secrets(&self) {
        let mut drafts = self.drafts.borrow_mut();
        drafts.password.clear();
        drafts.confirm_password.clear();
    }

    pub fn logout(&self) -> SessionState {
        self.clear_secrets();
        let state = self.auth.logout();
        self.screen.set(AuthScreen::Login);
        state
    }

    pub fn dismiss_role_selector(&self) {
        if let Err(e) = self.session.dismiss_onboarding() {
            log::error!("❌ [APP] Error guardando has_seen_role_selector: {}", e);
        }
    }

    #[cfg(feature = "role-selector")]
    pub fn select_role(&self, role: Role) {
        if let Err(e) = self.session.override_role(role) {
            log::error!("❌ [APP] Error cambiando rol: {}", e);
        }
    }

    /// Suscribirse a cualquier cambio (sesión, formulario, pantalla)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        {
            let cb = Rc::clone(&callback);
            self.session.subscribe(move || cb());
        }
        {
            let cb = Rc::clone(&callback);
            self.auth.subscribe(move || cb());
        }
        self.screen.subscribe(move || callback());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::models::Credential;
    use crate::services::MockAuthApi;
    use crate::utils::MemoryStorage;
    use crate::views::router::ViewTag;

    fn app() -> AppState<MemoryStorage> {
        AppState::new(MemoryStorage::new(), Rc::new(MockAuthApi::new(0)))
    }

    #[tokio::test(flavor = "current_thread")]
    async fn full_session_lifecycle() {
        let app = app();
        assert_eq!(app.route().view, ViewTag::Loading);

        app.start();
        assert_eq!(app.route().view, ViewTag::Login);

        app.auth
            .login(Credential::new("admin@x.com", "secret"))
            .await
            .unwrap();
        let r = app.route();
        assert_eq!(r.view, ViewTag::AdminDashboard);
        assert!(r.overlay);

        app.dismiss_role_selector();
        let r = app.route();
        assert_eq!(r.view, ViewTag::AdminDashboard);
        assert!(!r.overlay);

        app.drafts.borrow_mut().password = "secret".into();
        app.logout();
        assert_eq!(app.route().view, ViewTag::Login);
        assert_eq!(app.current_screen(), AuthScreen::Login);
        assert!(app.drafts.borrow().password.is_empty());

        app.auth
            .login(Credential::new("bob@x.com", "secret"))
            .await
            .unwrap();
        let r = app.route();
        assert_eq!(r.view, ViewTag::UserDashboard);
        assert!(!r.overlay);
    }

    #[test]
    fn reload_restores_the_same_route() {
        let backend = MemoryStorage::new();
        let first = AppState::new(backend.clone(), Rc::new(MockAuthApi::new(0)));
        first.start();
        first
            .session
            .store()
            .save("fake-token-1", &crate::models::UserRecord {
                id: "123".into(),
                email: "admin@x.com".into(),
                name: "admin".into(),
                role: crate::models::Role::Admin,
            })
            .unwrap();

        // "Recarga": nuevo estado sobre el mismo storage
        let second = AppState::new(backend, Rc::new(MockAuthApi::new(0)));
        second.start();
        assert_eq!(second.route().view, ViewTag::AdminDashboard);
        assert!(second.route().overlay);
    }

    #[test]
    fn switching_screens_notifies_and_resets_form() {
        let app = app();
        app.start();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            app.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }

        app.show_screen(AuthScreen::Register);
        assert_eq!(app.current_screen(), AuthScreen::Register);
        assert!(hits.get() >= 1);

        let before = hits.get();
        app.show_screen(AuthScreen::Register);
        assert_eq!(hits.get(), before);
    }

    #[cfg(feature = "role-selector")]
    #[tokio::test(flavor = "current_thread")]
    async fn role_selector_switches_dashboard_without_closing() {
        let app = app();
        app.start();
        app.auth
            .login(Credential::new("bob@x.com", "secret"))
            .await
            .unwrap();
        assert_eq!(app.route().view, ViewTag::UserDashboard);

        app.select_role(Role::Admin);
        let r = app.route();
        assert_eq!(r.view, ViewTag::AdminDashboard);
        assert!(r.overlay);
    }
}
