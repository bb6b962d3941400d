// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, mount_point};
use crate::services::auth_api_from_config;
use crate::state::{AppState, BrowserAppState};
use crate::utils::LocalStorage;
use crate::views::render_app;

thread_local! {
    /// Hay un re-render programado; varios cambios seguidos se agrupan
    static RENDER_SCHEDULED: Cell<bool> = Cell::new(false);
}

/// Aplicación principal
pub struct App {
    state: BrowserAppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = mount_point("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        log::info!(
            "🔧 [APP] Entorno: {} | auth: {:?} | API: {}",
            CONFIG.environment,
            CONFIG.auth_mode,
            CONFIG.api_url
        );

        let state = AppState::new(LocalStorage, auth_api_from_config(&CONFIG));
        let restored = state.start();
        log::info!("💾 [APP] Sesión inicial: {:?}", state.route());

        // Comprobación consultiva: no cierra la sesión
        if restored.is_authenticated() {
            let state = state.clone();
            spawn_local(async move {
                if !state.auth.validate_session().await {
                    log::warn!("⚠️ [APP] El servidor no reconoce el token guardado");
                }
            });
        }

        state.subscribe_to_changes(schedule_render);

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}

fn schedule_render() {
    if RENDER_SCHEDULED.with(|s| s.replace(true)) {
        return;
    }
    gloo_timers::callback::Timeout::new(0, || {
        RENDER_SCHEDULED.with(|s| s.set(false));
        crate::rerender_app();
    })
    .forget();
}
