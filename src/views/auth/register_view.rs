use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::models::RegisterData;
use crate::state::{AuthScreen, BrowserAppState, FormDrafts};
use crate::views::shared::{link_button, messages, password_field, submit_button, text_field};

/// Campo de texto que escribe en un borrador concreto
fn draft_field(
    state: &BrowserAppState,
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    disabled: bool,
    write: fn(&mut FormDrafts, String),
) -> Result<Element, JsValue> {
    let state = state.clone();
    text_field(id, label, input_type, placeholder, value, disabled, move |v| {
        write(&mut state.drafts.borrow_mut(), v);
        state.auth.clear_messages();
    })
}

fn draft_password(
    state: &BrowserAppState,
    id: &str,
    label: &str,
    value: &str,
    disabled: bool,
    write: fn(&mut FormDrafts, String),
) -> Result<Element, JsValue> {
    let state = state.clone();
    password_field(id, label, value, disabled, move |v| {
        write(&mut state.drafts.borrow_mut(), v);
        state.auth.clear_messages();
    })
}

/// Renderizar vista de registro
pub fn render_register(state: &BrowserAppState) -> Result<Element, JsValue> {
    let status = state.auth.status();
    let drafts = state.drafts.borrow().clone();
    let busy = status.submitting;

    let screen = ElementBuilder::new("div")?.class("register-container").build();
    let boxed = ElementBuilder::new("div")?.class("register-box").build();

    let header = ElementBuilder::new("div")?
        .class("register-header")
        .child(ElementBuilder::new("h1")?.text("Criar conta").build())?
        .child(ElementBuilder::new("p")?.text("Preencha os dados para se cadastrar").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("register-form").build();
    if let Some(banner) = messages(&status)? {
        append_child(&form, &banner)?;
    }

    let fields = [
        draft_field(state, "name", "Nome completo", "text", "Seu nome", &drafts.name, busy, |d, v| d.name = v)?,
        draft_field(state, "email", "Email", "email", "seu@email.com", &drafts.email, busy, |d, v| d.email = v)?,
        draft_password(state, "password", "Senha", &drafts.password, busy, |d, v| d.password = v)?,
        draft_password(state, "confirmPassword", "Confirmar senha", &drafts.confirm_password, busy, |d, v| {
            d.confirm_password = v
        })?,
    ];
    for field in &fields {
        append_child(&form, field)?;
    }
    append_child(&form, &submit_button("Cadastrar", "Cadastrando...", &status)?)?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let data = {
                let drafts = state.drafts.borrow();
                RegisterData {
                    name: drafts.name.clone(),
                    email: drafts.email.clone(),
                    password: drafts.password.clone(),
                    confirm_password: drafts.confirm_password.clone(),
                }
            };
            let state = state.clone();
            spawn_local(async move {
                match state.auth.register(data).await {
                    Ok(_) => state.clear_secrets(),
                    Err(e) => log::debug!("📝 [REGISTER] Envío no completado: {:?}", e),
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("div")?.class("register-footer").build();
    append_child(&footer, &ElementBuilder::new("span")?.text("Já tem uma conta?").build())?;
    {
        let state = state.clone();
        append_child(&footer, &link_button("Entrar", move || state.show_screen(AuthScreen::Login))?)?;
    }

    append_child(&boxed, &header)?;
    append_child(&boxed, &form)?;
    append_child(&boxed, &footer)?;
    append_child(&screen, &boxed)?;
    Ok(screen)
}
