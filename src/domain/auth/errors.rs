use thiserror::Error;

/// Main authentication error type
///
/// Validation faults carry the offending parameter name. Everything else is
/// an infrastructure or configuration fault; the HTTP adapter folds those
/// into a single generic response.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("missing param: {0}")]
  MissingParam(String),

  #[error("invalid param: {0}")]
  InvalidParam(String),

  #[error("missing dependency: {0}")]
  MissingDependency(&'static str),

  #[error("repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("encrypter error: {0}")]
  Encrypter(String),

  #[error("token generation error: {0}")]
  TokenGeneration(String),
}

impl AuthError {
  /// Convenience constructor for a missing request parameter
  pub fn missing_param(name: impl Into<String>) -> Self {
    Self::MissingParam(name.into())
  }

  /// Convenience constructor for an invalid request parameter
  pub fn invalid_param(name: impl Into<String>) -> Self {
    Self::InvalidParam(name.into())
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

// Automatic conversions from external error types

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => RepositoryError::DatabaseError(db_err.message().to_string()),
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}
