use serde::{Deserialize, Serialize};

/// Request body for the login endpoint
///
/// Both fields are optional at the wire so that presence is checked by the
/// router rather than rejected during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginBody {
  /// User's email address
  pub email: Option<String>,

  /// User's password (plain text, never persisted)
  pub password: Option<String>,
}

/// Response body after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
  /// Access token issued for this login
  #[serde(rename = "accessToken")]
  pub access_token: String,
}

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
  /// Fixed, user-safe error message
  pub error: String,
}
