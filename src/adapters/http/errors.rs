use actix_web::http::StatusCode;
use std::fmt;

/// Protocol-level error taxonomy for the login endpoint
///
/// Messages are derived only from the kind and the parameter name, never
/// from collaborator internals, so nothing about the underlying fault leaks
/// to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
  /// Required request parameter absent (400)
  MissingParam(String),

  /// Request parameter present but malformed (400)
  InvalidParam(String),

  /// Credentials rejected (401); never says which check failed
  Unauthorized,

  /// Any infrastructure or configuration fault (500)
  ServerFault,
}

impl ApiError {
  /// HTTP status code for this error kind
  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
      ApiError::InvalidParam(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::ServerFault => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Fixed, user-safe message for this error kind
  pub fn message(&self) -> String {
    match self {
      ApiError::MissingParam(name) => format!("missing param: {}", name),
      ApiError::InvalidParam(name) => format!("invalid param: {}", name),
      ApiError::Unauthorized => "unauthorized".to_string(),
      ApiError::ServerFault => "internal server error".to_string(),
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message())
  }
}
