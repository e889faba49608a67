use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{errors::AuthError, ports::UpdateAccessTokenRepository};

/// PostgreSQL implementation of the UpdateAccessTokenRepository trait
pub struct PostgresUpdateAccessTokenRepository {
  pool: PgPool,
}

impl PostgresUpdateAccessTokenRepository {
  /// Creates a new instance of PostgresUpdateAccessTokenRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UpdateAccessTokenRepository for PostgresUpdateAccessTokenRepository {
  async fn update(&self, user_id: Uuid, access_token: &str) -> Result<(), AuthError> {
    // Plain last-write-wins: concurrent logins for the same user may both
    // succeed and either token ends up stored.
    sqlx::query(
      r#"
            UPDATE users
            SET
                access_token = $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
    )
    .bind(user_id)
    .bind(access_token)
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to update access token: {}", e);
      AuthError::from(e)
    })?;

    Ok(())
  }
}
