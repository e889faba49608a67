use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as seen by the authentication core
///
/// This is the projection the login flow works with: the stable identifier,
/// the stored password hash, and the access token column it may overwrite.
/// Everything else about a user lives outside this crate's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// Hashed password using Argon2
  pub password_hash: String,
  /// Access token issued by the last successful login, if any
  pub access_token: Option<String>,
}

impl User {
  /// Creates a user from its persisted fields
  pub fn new(id: Uuid, password_hash: String, access_token: Option<String>) -> Self {
    Self {
      id,
      password_hash,
      access_token,
    }
  }
}

/// Result of an authentication attempt
///
/// A denied attempt is a normal negative result, not an error. `Denied`
/// covers both an unknown email and a wrong password so callers cannot tell
/// which check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
  /// Credentials matched; carries the freshly issued access token
  Granted(String),
  /// Unknown email or wrong password
  Denied,
}

impl AuthOutcome {
  /// Returns the access token for a granted attempt
  pub fn access_token(&self) -> Option<&str> {
    match self {
      Self::Granted(token) => Some(token),
      Self::Denied => None,
    }
  }

  /// Returns true if the attempt was denied
  pub fn is_denied(&self) -> bool {
    matches!(self, Self::Denied)
  }
}
