pub mod validation;
pub mod auth_viewmodel;

pub use auth_viewmodel::{AuthViewModel, FormStatus};
pub use validation::{validate_email, validate_login, validate_new_password, validate_register};
