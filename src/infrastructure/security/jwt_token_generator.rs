use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::TokenGenerator;

/// Claims carried by an issued access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// User id the token was issued for
  pub sub: String,
  /// Expiration timestamp (seconds since epoch)
  pub exp: usize,
}

/// JWT access token generator
///
/// Signs an HS256 token whose subject is the user id, with an expiration
/// taken from the configured time to live.
pub struct JwtTokenGenerator {
  encoding_key: EncodingKey,
  ttl_seconds: i64,
}

impl JwtTokenGenerator {
  /// Creates a new generator signing with `secret`, issuing tokens valid for
  /// `ttl_seconds`
  pub fn new(secret: &str, ttl_seconds: i64) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      ttl_seconds,
    }
  }
}

#[async_trait]
impl TokenGenerator for JwtTokenGenerator {
  async fn generate(&self, user_id: Uuid) -> Result<String, AuthError> {
    let expires_at = Utc::now() + Duration::seconds(self.ttl_seconds);
    let claims = Claims {
      sub: user_id.to_string(),
      exp: expires_at.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &self.encoding_key)
      .map_err(|e| AuthError::TokenGeneration(e.to_string()))
  }
}
