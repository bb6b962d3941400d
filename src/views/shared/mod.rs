pub mod form;
pub mod header;

pub use form::{link_button, messages, password_field, submit_button, text_field};
pub use header::render_header;
