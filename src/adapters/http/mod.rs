pub mod dtos;
pub mod errors;
pub mod login_router;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginBody, TokenResponse};
pub use errors::ApiError;
pub use login_router::{HttpRequest, HttpResponse, LoginRouter, ResponseBody, RouterDependencies};
pub use routes::{configure_login_routes, login_handler};
