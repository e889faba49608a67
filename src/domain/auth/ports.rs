use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{AuthOutcome, User};
use super::errors::AuthError;

/// Repository trait for loading a user by email
///
/// Each login performs a fresh load; implementations must not cache across
/// requests.
#[async_trait]
pub trait LoadUserByEmailRepository: Send + Sync {
  /// Returns the user registered under `email`, or `None` if there is none
  async fn load(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Repository trait for persisting a freshly issued access token
#[async_trait]
pub trait UpdateAccessTokenRepository: Send + Sync {
  /// Stores `access_token` on the user addressed by `user_id`
  async fn update(&self, user_id: Uuid, access_token: &str) -> Result<(), AuthError>;
}

/// Service trait for comparing a plain password against a stored hash
#[async_trait]
pub trait Encrypter: Send + Sync {
  /// Returns true if `password` matches `hashed_password`
  async fn compare(&self, password: &str, hashed_password: &str) -> Result<bool, AuthError>;
}

/// Service trait for generating an access token keyed by a user id
#[async_trait]
pub trait TokenGenerator: Send + Sync {
  /// Produces a new access token for `user_id`
  async fn generate(&self, user_id: Uuid) -> Result<String, AuthError>;
}

/// Trait for checking whether a string is a well-formed email address
pub trait EmailValidator: Send + Sync {
  fn is_valid(&self, email: &str) -> bool;
}

/// Seam between the HTTP adapter and the authentication use case
#[async_trait]
pub trait Authenticator: Send + Sync {
  /// Verifies credentials and, on success, mints and persists a token
  async fn auth(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError>;
}
