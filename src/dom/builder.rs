// ============================================================================
// ELEMENT BUILDER - Construcción encadenada de elementos
// ============================================================================
// Los métodos que tocan atributos devuelven `Result` (el DOM puede
// rechazar el nombre); clase y texto no fallan.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::element::{append_child, create_element, set_flag};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        create_element(tag).map(|element| Self { element })
    }

    /// Reemplaza todas las clases
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        self.attr("id", id)
    }

    pub fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    pub fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        set_flag(&self.element, name, on)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}
