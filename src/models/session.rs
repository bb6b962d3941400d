// ============================================================================
// SESSION - Estado de sesión derivado del storage
// ============================================================================

use crate::models::auth::UserRecord;

/// Contenido crudo del storage tal como lo devuelve `SessionStore::load()`
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
    pub onboarding_seen: bool,
}

/// Estado de sesión. Nunca se guarda: se recalcula desde el snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Antes de la primera lectura del storage
    #[default]
    Booting,
    Unauthenticated,
    Authenticated {
        user: UserRecord,
        show_onboarding: bool,
    },
}

impl SessionState {
    /// Función pura: token + usuario presentes => autenticado
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let has_token = snapshot.token.as_deref().is_some_and(|t| !t.is_empty());
        match (&snapshot.user, has_token) {
            (Some(user), true) => SessionState::Authenticated {
                user: user.clone(),
                show_onboarding: !snapshot.onboarding_seen,
            },
            _ => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn show_onboarding(&self) -> bool {
        matches!(
            self,
            SessionState::Authenticated {
                show_onboarding: true,
                ..
            }
        )
    }
}
