//! Authentication use cases
//!
//! Orchestrates the domain ports to implement the login workflow.

mod auth_usecase;

pub use auth_usecase::{AuthDependencies, AuthUseCase};
