//! Application layer
//!
//! Use cases coordinating domain ports to fulfill business requirements.

pub mod auth;
