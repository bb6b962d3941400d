pub mod router;
pub mod app;
pub mod auth;
pub mod dashboard;
pub mod role_selector;
pub mod shared;

pub use app::render_app;
pub use router::{route, Route, ViewTag};
