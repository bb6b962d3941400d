// ============================================================================
// ELEMENT HELPERS - Acceso al document y operaciones sobre elementos
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Contenedor donde se monta la app (`#app`)
pub fn mount_point(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

/// Vaciar un contenedor antes de volver a pintarlo
pub fn clear_children(container: &Element) {
    container.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Atributo booleano (`disabled`, `required`...)
pub fn set_flag(element: &Element, name: &str, on: bool) -> Result<(), JsValue> {
    if on {
        element.set_attribute(name, "")
    } else {
        element.remove_attribute(name)
    }
}

/// Valor actual de un `<input>`
pub fn input_value(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::value)
}

/// Alternar un campo de contraseña entre oculto y visible
pub fn toggle_password_visibility(input: &Element) -> Result<(), JsValue> {
    let next = match input.get_attribute("type").as_deref() {
        Some("password") => "text",
        _ => "password",
    };
    input.set_attribute("type", next)
}

/// Quitar el aviso (`role="alert"`) del formulario que contiene `field`,
/// sin re-render: el campo conserva el foco.
pub fn remove_form_alert(field: &Element) -> Result<(), JsValue> {
    if let Some(form) = field.closest("form")? {
        if let Some(alert) = form.query_selector("[role='alert']")? {
            alert.remove();
        }
    }
    Ok(())
}
