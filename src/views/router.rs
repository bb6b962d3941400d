// ============================================================================
// ROUTER - Estado de sesión -> pantalla
// ============================================================================
// Función pura, sin estado propio. Se recalcula en cada cambio de sesión.
// ============================================================================

use crate::models::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewTag {
    /// Spinner mientras se lee el storage
    Loading,
    Login,
    AdminDashboard,
    UserDashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub view: ViewTag,
    /// Selector de rol encima del dashboard
    pub overlay: bool,
}

pub fn route(state: &SessionState) -> Route {
    match state {
        SessionState::Booting => Route {
            view: ViewTag::Loading,
            overlay: false,
        },
        SessionState::Unauthenticated => Route {
            view: ViewTag::Login,
            overlay: false,
        },
        SessionState::Authenticated {
            user,
            show_onboarding,
        } => Route {
            view: if user.role.is_admin() {
                ViewTag::AdminDashboard
            } else {
                ViewTag::UserDashboard
            },
            overlay: *show_onboarding,
        },
    }
}
