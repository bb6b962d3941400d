pub mod auth;
pub mod session;

pub use auth::{
    ApiMessage, AuthResponse, Credential, ForgotPasswordRequest, RegisterData, RegisterRequest,
    ResetPasswordRequest, Role, UserRecord,
};
pub use session::{SessionSnapshot, SessionState};
