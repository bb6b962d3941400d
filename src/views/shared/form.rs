// ============================================================================
// FORM - Piezas comunes de los formularios de autenticación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{
    append_child, input_value, on_click, on_input, remove_form_alert, toggle_password_visibility,
    ElementBuilder,
};
use crate::viewmodels::FormStatus;

/// `<label>` + `<input>`; `on_change` recibe el valor en cada tecla.
/// Al teclear se retira el aviso del formulario sin re-renderizar.
pub fn text_field<F>(
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
    value: &str,
    disabled: bool,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .flag("required", true)?
        .flag("disabled", disabled)?
        .build();

    {
        let input_el = input.clone();
        on_input(&input, move |_| {
            on_change(input_value(&input_el).unwrap_or_default());
            if let Err(e) = remove_form_alert(&input_el) {
                log::warn!("⚠️ [FORM] No se pudo quitar el aviso: {:?}", e);
            }
        })?;
    }

    append_child(&group, &label_el)?;
    append_child(&group, &input)?;
    Ok(group)
}

/// Campo de contraseña con botón mostrar/ocultar (solo presentación)
pub fn password_field<F>(
    id: &str,
    label: &str,
    value: &str,
    disabled: bool,
    on_change: F,
) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let group = text_field(id, label, "password", "••••••••", value, disabled, on_change)?;

    let toggle = ElementBuilder::new("button")?
        .attr("type", "button")?
        .attr("tabindex", "-1")?
        .class("toggle-password")
        .text("👁")
        .build();

    if let Some(input) = group.query_selector("input")? {
        on_click(&toggle, move |_| {
            let _ = toggle_password_visibility(&input);
        })?;
    }

    append_child(&group, &toggle)?;
    Ok(group)
}

/// Botón de envío; deshabilitado mientras hay una petición en vuelo
pub fn submit_button(label: &str, busy_label: &str, status: &FormStatus) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class(if status.submitting { "btn-submit loading" } else { "btn-submit" })
        .flag("disabled", status.submitting)?;

    if status.submitting {
        let spinner = ElementBuilder::new("span")?.class("spinner").build();
        let text = ElementBuilder::new("span")?.text(busy_label).build();
        Ok(button.child(spinner)?.child(text)?.build())
    } else {
        Ok(button.text(label).build())
    }
}

/// Error y aviso del formulario (si hay)
pub fn messages(status: &FormStatus) -> Result<Option<Element>, JsValue> {
    let (class, text) = match (&status.error, &status.notice) {
        (Some(error), _) => ("error-message", error),
        (None, Some(notice)) => ("success-message", notice),
        (None, None) => return Ok(None),
    };
    let banner = ElementBuilder::new("div")?
        .class(class)
        .attr("role", "alert")?
        .text(text)
        .build();
    Ok(Some(banner))
}

/// Enlace de texto que cambia de pantalla
pub fn link_button<F>(text: &str, on_press: F) -> Result<Element, JsValue>
where
    F: Fn() + 'static,
{
    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("link-button")
        .text(text)
        .build();
    on_click(&button, move |_| on_press())?;
    Ok(button)
}
