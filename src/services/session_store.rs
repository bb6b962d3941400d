// ============================================================================
// SESSION STORE - Persistencia de token, usuario y flag de onboarding
// ============================================================================
// Único punto que lee/escribe las claves de sesión. Token y usuario se
// escriben juntos y se borran juntos.
// ============================================================================

use crate::errors::StorageError;
use crate::models::{SessionSnapshot, UserRecord};
use crate::utils::{
    KeyValueStore, STORAGE_KEY_ROLE_SELECTOR_SEEN, STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Leer el estado persistido. Nunca falla: los errores degradan a "vacío".
    /// Token y usuario van juntos; si falta uno o el usuario está corrupto
    /// se borran ambos y la sesión queda vacía.
    pub fn load(&self) -> SessionSnapshot {
        let token = self
            .read(STORAGE_KEY_TOKEN)
            .filter(|t| !t.is_empty());

        let user = match self.load_user() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ [STORE] {}; se trata como sesión vacía", e);
                None
            }
        };

        let (token, user) = match (token, user) {
            (Some(token), Some(user)) => (Some(token), Some(user)),
            (None, None) => (None, None),
            _ => {
                self.discard_orphans();
                (None, None)
            }
        };

        let onboarding_seen = self
            .read(STORAGE_KEY_ROLE_SELECTOR_SEEN)
            .is_some_and(|v| v == "true");

        SessionSnapshot {
            token,
            user,
            onboarding_seen,
        }
    }

    /// Token de la sesión actual; mismas reglas que `load()`
    pub fn token(&self) -> Option<String> {
        self.load().token
    }

    fn discard_orphans(&self) {
        log::warn!("🧹 [STORE] Token y usuario descolgados, se borran");
        if let Err(e) = self.clear() {
            log::error!("❌ [STORE] No se pudo limpiar la sesión: {}", e);
        }
    }

    fn load_user(&self) -> Result<Option<UserRecord>, StorageError> {
        match self.read(STORAGE_KEY_USER) {
            Some(json) => serde_json::from_str::<UserRecord>(&json)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(format!("{}: {}", STORAGE_KEY_USER, e))),
            None => Ok(None),
        }
    }

    /// Guardar token + usuario
    pub fn save(&self, token: &str, user: &UserRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)
            .map_err(|e| StorageError::Write(format!("serializando usuario: {}", e)))?;

        self.backend.set(STORAGE_KEY_TOKEN, token)?;
        if let Err(e) = self.backend.set(STORAGE_KEY_USER, &json) {
            // No dejar un token huérfano
            let _ = self.backend.remove(STORAGE_KEY_TOKEN);
            return Err(e);
        }
        log::info!("💾 [STORE] Sesión guardada para {}", user.email);
        Ok(())
    }

    /// Sobrescribir solo el usuario; exige que exista un token
    pub fn save_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        let token = self
            .token()
            .ok_or_else(|| StorageError::Write("no hay token, no se guarda el usuario".to_string()))?;
        self.save(&token, user)
    }

    /// Marcar el selector de rol como visto (idempotente)
    pub fn mark_onboarding_seen(&self) -> Result<(), StorageError> {
        self.backend.set(STORAGE_KEY_ROLE_SELECTOR_SEEN, "true")
    }

    /// Borrar token y usuario. El flag de onboarding se conserva.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token_result = self.backend.remove(STORAGE_KEY_TOKEN);
        let user_result = self.backend.remove(STORAGE_KEY_USER);
        log::info!("🗑️ [STORE] Sesión eliminada");
        token_result.and(user_result)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("❌ [STORE] Error leyendo {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    fn alice() -> UserRecord {
        UserRecord {
            id: "42".into(),
            email: "alice@x.com".into(),
            name: "alice".into(),
            role: Role::Admin,
        }
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new())
    }

    #[test]
    fn fresh_store_is_empty() {
        assert_eq!(store().load(), SessionSnapshot::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = store();
        store.save("tok-1", &alice()).unwrap();

        let snap = store.load();
        assert_eq!(snap.token.as_deref(), Some("tok-1"));
        assert_eq!(snap.user, Some(alice()));
        assert!(!snap.onboarding_seen);
    }

    #[test]
    fn persisted_layout_matches_the_browser_keys() {
        let store = store();
        store.save("tok-1", &alice()).unwrap();
        store.mark_onboarding_seen().unwrap();

        let backend = store.backend();
        assert_eq!(backend.get("auth_token").unwrap().as_deref(), Some("tok-1"));
        assert_eq!(
            backend.get("has_seen_role_selector").unwrap().as_deref(),
            Some("true")
        );
        let raw = backend.get("user_data").unwrap().unwrap();
        let user: UserRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(user, alice());
    }

    #[test]
    fn clear_keeps_onboarding_flag() {
        let store = store();
        store.save("tok-1", &alice()).unwrap();
        store.mark_onboarding_seen().unwrap();
        store.clear().unwrap();

        let snap = store.load();
        assert_eq!(snap.token, None);
        assert_eq!(snap.user, None);
        assert!(snap.onboarding_seen);
    }

    #[test]
    fn mark_onboarding_seen_is_idempotent() {
        let store = store();
        store.mark_onboarding_seen().unwrap();
        store.mark_onboarding_seen().unwrap();
        assert!(store.load().onboarding_seen);
        assert_eq!(store.backend().len(), 1);
    }

    #[test]
    fn corrupt_user_record_degrades_to_absent() {
        let store = store();
        store.backend().set("auth_token", "tok-1").unwrap();
        store.backend().set("user_data", "{not json").unwrap();

        let snap = store.load();
        assert_eq!(snap.token, None);
        assert_eq!(snap.user, None);
        assert_eq!(store.token(), None);
        // Ambas claves se borran; el flag de onboarding no existía
        assert!(store.backend().is_empty());
    }

    #[test]
    fn token_without_user_is_discarded() {
        let store = store();
        store.backend().set("auth_token", "tok-1").unwrap();
        store.mark_onboarding_seen().unwrap();

        let snap = store.load();
        assert_eq!(snap.token, None);
        assert!(snap.onboarding_seen);
        assert_eq!(store.backend().get("auth_token").unwrap(), None);
    }

    #[test]
    fn user_without_token_is_discarded() {
        let store = store();
        store
            .backend()
            .set("user_data", &serde_json::to_string(&alice()).unwrap())
            .unwrap();

        assert_eq!(store.load(), SessionSnapshot::default());
        assert_eq!(store.backend().get("user_data").unwrap(), None);
    }

    #[test]
    fn onboarding_flag_requires_literal_true() {
        let store = store();
        store.backend().set("has_seen_role_selector", "yes").unwrap();
        assert!(!store.load().onboarding_seen);
    }

    #[test]
    fn save_user_needs_a_token() {
        let store = store();
        assert!(store.save_user(&alice()).is_err());
        assert_eq!(store.load().user, None);

        store.save("tok-1", &alice()).unwrap();
        let mut demoted = alice();
        demoted.role = Role::User;
        store.save_user(&demoted).unwrap();

        let snap = store.load();
        assert_eq!(snap.token.as_deref(), Some("tok-1"));
        assert_eq!(snap.user.map(|u| u.role), Some(Role::User));
    }
}
