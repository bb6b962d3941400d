// ============================================================================
// APP VIEW - Vista raíz
// ============================================================================
// Elige la pantalla según la ruta y apila el selector de rol encima.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::state::{AuthScreen, BrowserAppState};
use crate::views::auth::{render_forgot_password, render_login, render_register};
use crate::views::dashboard::{render_admin_dashboard, render_user_dashboard};
use crate::views::role_selector::render_role_selector;
use crate::views::router::ViewTag;

fn render_loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("loading-screen")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .child(ElementBuilder::new("p")?.text("Carregando...").build())?
        .build())
}

/// Renderizar aplicación completa
pub fn render_app(state: &BrowserAppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app-container").build();
    let route = state.route();
    let session = state.session.state();

    let view = match (route.view, session.user()) {
        (ViewTag::Loading, _) => render_loading()?,
        (ViewTag::Login, _) => match state.current_screen() {
            AuthScreen::Login => render_login(state)?,
            AuthScreen::Register => render_register(state)?,
            AuthScreen::ForgotPassword => render_forgot_password(state)?,
        },
        (ViewTag::AdminDashboard, Some(user)) => render_admin_dashboard(state, user)?,
        (ViewTag::UserDashboard, Some(user)) => render_user_dashboard(state, user)?,
        // Ruta de dashboard sin usuario: el router no la produce
        (_, None) => render_loading()?,
    };
    append_child(&container, &view)?;

    if route.overlay {
        if let Some(user) = session.user() {
            append_child(&container, &render_role_selector(state, user)?)?;
        }
    }

    Ok(container)
}
