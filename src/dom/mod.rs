// DOM sin framework: creación de elementos, builder y listeners

pub mod element;
pub mod builder;
pub mod events;

pub use element::{
    append_child, clear_children, input_value, mount_point, remove_form_alert, toggle_password_visibility,
};
pub use builder::ElementBuilder;
pub use events::{on_click, on_input, on_submit};
