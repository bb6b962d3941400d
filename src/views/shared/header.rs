use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::UserRecord;
use crate::state::BrowserAppState;

/// Cabecera de los dashboards: saludo, rol y botón de salir
pub fn render_header(state: &BrowserAppState, user: &UserRecord) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("dashboard-header").build();

    let greeting = ElementBuilder::new("div")?
        .class("user-greeting")
        .child(ElementBuilder::new("h1")?.text(&format!("Olá, {}", user.name)).build())?
        .child(
            ElementBuilder::new("span")?
                .class("user-role-badge")
                .text(if user.role.is_admin() { "ADMINISTRADOR" } else { "USUÁRIO" })
                .build(),
        )?
        .build();

    let logout_btn = ElementBuilder::new("button")?
        .class("logout-btn")
        .text("Sair")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            state.logout();
        })?;
    }

    append_child(&header, &greeting)?;
    append_child(&header, &logout_btn)?;
    Ok(header)
}
