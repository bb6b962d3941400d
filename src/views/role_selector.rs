// ============================================================================
// ROLE SELECTOR - Overlay de onboarding (modo demostración)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::UserRecord;
#[cfg(feature = "role-selector")]
use crate::models::Role;
use crate::state::BrowserAppState;

#[cfg(feature = "role-selector")]
fn role_option(
    state: &BrowserAppState,
    role: Role,
    current: Role,
    title: &str,
    description: &str,
) -> Result<Element, JsValue> {
    let class = if role == current { "role-option selected" } else { "role-option" };
    let option = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .child(ElementBuilder::new("h3")?.text(title).build())?
        .child(ElementBuilder::new("p")?.text(description).build())?
        .build();

    let state = state.clone();
    on_click(&option, move |_| state.select_role(role))?;
    Ok(option)
}

/// Renderizar overlay del selector de rol
pub fn render_role_selector(state: &BrowserAppState, user: &UserRecord) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("role-selector-overlay").build();
    {
        let state = state.clone();
        on_click(&overlay, move |_| state.dismiss_role_selector())?;
    }

    let modal = ElementBuilder::new("div")?.class("role-selector-modal").build();
    // Los clicks dentro del modal no llegan al backdrop
    on_click(&modal, |e| e.stop_propagation())?;

    let header = ElementBuilder::new("div")?
        .class("modal-header")
        .child(ElementBuilder::new("h2")?.text("🎭 Modo de Demonstração").build())?
        .child(ElementBuilder::new("p")?.text("Escolha um tipo de usuário para visualizar").build())?
        .build();
    append_child(&modal, &header)?;

    #[cfg(feature = "role-selector")]
    {
        let options = ElementBuilder::new("div")?
            .class("role-options")
            .child(role_option(
                state,
                Role::Admin,
                user.role,
                "Administrador",
                "Acesso completo ao painel administrativo",
            )?)?
            .child(role_option(
                state,
                Role::User,
                user.role,
                "Usuário",
                "Acesso ao painel pessoal do usuário",
            )?)?
            .build();
        append_child(&modal, &options)?;
    }
    #[cfg(not(feature = "role-selector"))]
    {
        let current = ElementBuilder::new("p")?
            .class("role-current")
            .text(&format!("Perfil atual: {}", user.role))
            .build();
        append_child(&modal, &current)?;
    }

    let footer = ElementBuilder::new("div")?.class("modal-footer").build();
    append_child(
        &footer,
        &ElementBuilder::new("p")?
            .class("demo-note")
            .text("⚠️ Este é um modo de demonstração. Em produção, o role será definido pelo backend.")
            .build(),
    )?;
    let close = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-submit")
        .text("Continuar")
        .build();
    {
        let state = state.clone();
        on_click(&close, move |_| state.dismiss_role_selector())?;
    }
    append_child(&footer, &close)?;
    append_child(&modal, &footer)?;

    append_child(&overlay, &modal)?;
    Ok(overlay)
}
