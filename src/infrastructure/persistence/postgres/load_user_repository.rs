use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{entities::User, errors::AuthError, ports::LoadUserByEmailRepository};

/// PostgreSQL implementation of the LoadUserByEmailRepository trait
pub struct PostgresLoadUserByEmailRepository {
  pool: PgPool,
}

impl PostgresLoadUserByEmailRepository {
  /// Creates a new instance of PostgresLoadUserByEmailRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row projection consumed by the login flow
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  password_hash: String,
  access_token: Option<String>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::new(row.id, row.password_hash, row.access_token)
  }
}

#[async_trait]
impl LoadUserByEmailRepository for PostgresLoadUserByEmailRepository {
  async fn load(&self, email: &str) -> Result<Option<User>, AuthError> {
    let result = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT
                id,
                password_hash,
                access_token
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(Some(row)) => Ok(Some(row.into())),
      Ok(None) => Ok(None),
      Err(e) => Err(e.into()),
    }
  }
}
