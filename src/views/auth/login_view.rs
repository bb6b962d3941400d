// ============================================================================
// LOGIN VIEW - Rust puro
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::Credential;
use crate::state::{AuthScreen, BrowserAppState};
use crate::views::shared::{link_button, messages, password_field, submit_button, text_field};

/// Renderizar vista de login
pub fn render_login(state: &BrowserAppState) -> Result<Element, JsValue> {
    let status = state.auth.status();
    let drafts = state.drafts.borrow().clone();

    let screen = ElementBuilder::new("div")?.class("login-container").build();
    let boxed = ElementBuilder::new("div")?.class("login-box").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Bem-vindo").build())?
        .child(ElementBuilder::new("p")?.text("Entre com suas credenciais para continuar").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();

    if let Some(banner) = messages(&status)? {
        append_child(&form, &banner)?;
    }

    let email = {
        let state = state.clone();
        text_field("email", "Email", "email", "seu@email.com", &drafts.email, status.submitting, move |v| {
            state.drafts.borrow_mut().email = v;
            state.auth.clear_messages();
        })?
    };
    let password = {
        let state = state.clone();
        password_field("password", "Senha", &drafts.password, status.submitting, move |v| {
            state.drafts.borrow_mut().password = v;
            state.auth.clear_messages();
        })?
    };

    append_child(&form, &email)?;
    append_child(&form, &password)?;

    let forgot = {
        let state = state.clone();
        link_button("Esqueceu a senha?", move || state.show_screen(AuthScreen::ForgotPassword))?
    };
    append_child(&form, &forgot)?;
    append_child(&form, &submit_button("Entrar", "Entrando...", &status)?)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let credential = {
                let drafts = state.drafts.borrow();
                Credential::new(drafts.email.clone(), drafts.password.clone())
            };
            let state = state.clone();
            spawn_local(async move {
                match state.auth.login(credential).await {
                    Ok(_) => state.clear_secrets(),
                    Err(e) => log::debug!("🔐 [LOGIN] Envío no completado: {:?}", e),
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("div")?.class("login-footer").build();
    append_child(&footer, &ElementBuilder::new("span")?.text("Não tem uma conta?").build())?;
    {
        let state = state.clone();
        append_child(&footer, &link_button("Cadastre-se", move || state.show_screen(AuthScreen::Register))?)?;
    }

    append_child(&boxed, &header)?;
    append_child(&boxed, &form)?;
    append_child(&boxed, &footer)?;
    append_child(&screen, &boxed)?;
    Ok(screen)
}
