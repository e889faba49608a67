//! authgate: email/password authentication service issuing JWT access tokens
//!
//! Layered hexagonally: `domain` holds the entities, error taxonomy and
//! collaborator ports; `application` the login use case; `adapters::http`
//! the transport router; `infrastructure` the Postgres, Argon2, JWT and
//! validation implementations of the ports.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
