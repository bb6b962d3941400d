use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::{AuthScreen, BrowserAppState};
use crate::views::shared::{link_button, messages, submit_button, text_field};

/// Renderizar vista de recuperación de contraseña
pub fn render_forgot_password(state: &BrowserAppState) -> Result<Element, JsValue> {
    let status = state.auth.status();
    let email_draft = state.drafts.borrow().email.clone();

    let screen = ElementBuilder::new("div")?.class("login-container").build();
    let boxed = ElementBuilder::new("div")?.class("login-box").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Recuperar senha").build())?
        .child(
            ElementBuilder::new("p")?
                .text("Informe seu email para receber as instruções")
                .build(),
        )?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();
    if let Some(banner) = messages(&status)? {
        append_child(&form, &banner)?;
    }

    let email = {
        let state = state.clone();
        text_field("email", "Email", "email", "seu@email.com", &email_draft, status.submitting, move |v| {
            state.drafts.borrow_mut().email = v;
            state.auth.clear_messages();
        })?
    };
    append_child(&form, &email)?;
    append_child(&form, &submit_button("Enviar instruções", "Enviando...", &status)?)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let email = state.drafts.borrow().email.clone();
            let state = state.clone();
            spawn_local(async move {
                if let Err(e) = state.auth.forgot_password(email).await {
                    log::debug!("✉️ [FORGOT] Envío no completado: {:?}", e);
                }
            });
        })?;
    }

    let back = {
        let state = state.clone();
        link_button("Voltar para o login", move || state.show_screen(AuthScreen::Login))?
    };

    append_child(&boxed, &header)?;
    append_child(&boxed, &form)?;
    append_child(&boxed, &back)?;
    append_child(&screen, &boxed)?;
    Ok(screen)
}
