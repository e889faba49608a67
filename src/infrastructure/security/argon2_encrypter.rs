use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::Encrypter;

/// Argon2id password comparator
///
/// Uses the Argon2id algorithm with secure parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
pub struct Argon2Encrypter {
  argon2: Argon2<'static>,
}

impl Argon2Encrypter {
  /// Creates a new Argon2Encrypter with the specified parameters
  pub fn new() -> Result<Self, AuthError> {
    let memory_cost = 19456;
    let time_cost = 2;
    let parallelism = 1;
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len)
      .map_err(|e| AuthError::Encrypter(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Hashes a plain text password with a random salt
  ///
  /// Not part of the login flow (registration is out of scope); used to seed
  /// test fixtures and by operators creating accounts out of band.
  pub fn hash(&self, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| AuthError::Encrypter(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
  }
}

impl Default for Argon2Encrypter {
  fn default() -> Self {
    Self::new().expect("Failed to create default Argon2Encrypter")
  }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
  /// Verifies a plain text password against a stored hash
  ///
  /// A mismatch is `Ok(false)`; only a malformed stored hash or an internal
  /// failure is an error.
  async fn compare(&self, password: &str, hashed_password: &str) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password)
      .map_err(|e| AuthError::Encrypter(format!("Invalid hash format: {}", e)))?;

    match self
      .argon2
      .verify_password(password.as_bytes(), &parsed_hash)
    {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AuthError::Encrypter(format!(
        "Password verification failed: {}",
        e
      ))),
    }
  }
}
