use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::auth::entities::AuthOutcome;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{
  Authenticator, Encrypter, LoadUserByEmailRepository, TokenGenerator,
  UpdateAccessTokenRepository,
};

/// Collaborators required by [`AuthUseCase`]
///
/// Every handle is optional so a partially wired instance can be constructed
/// without error. The contract is enforced lazily, on the first `auth` call,
/// before any side effect.
#[derive(Default)]
pub struct AuthDependencies {
  pub load_user_repository: Option<Arc<dyn LoadUserByEmailRepository>>,
  pub update_access_token_repository: Option<Arc<dyn UpdateAccessTokenRepository>>,
  pub encrypter: Option<Arc<dyn Encrypter>>,
  pub token_generator: Option<Arc<dyn TokenGenerator>>,
}

/// Use case deciding whether credentials are valid and, if so, producing and
/// persisting a fresh access token
///
/// Stateless after construction; every invocation works on its own locals,
/// so concurrent calls need no synchronization. The only observable mutation
/// is the token update, which happens strictly after a password match.
pub struct AuthUseCase {
  deps: AuthDependencies,
}

impl AuthUseCase {
  /// Creates a new instance of AuthUseCase
  ///
  /// Construction is side-effect free and performs no dependency checks.
  pub fn new(deps: AuthDependencies) -> Self {
    Self { deps }
  }

  /// Authenticates a user by email and password
  ///
  /// # Returns
  /// `AuthOutcome::Granted` with the freshly persisted token, or
  /// `AuthOutcome::Denied` for an unknown email or a wrong password. The two
  /// denial causes are indistinguishable in the result.
  ///
  /// # Errors
  /// `AuthError::MissingParam` for an empty email or password,
  /// `AuthError::MissingDependency` for an unwired collaborator, and any
  /// collaborator failure propagated unmodified.
  pub async fn auth(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
    if email.is_empty() {
      return Err(AuthError::missing_param("email"));
    }
    if password.is_empty() {
      return Err(AuthError::missing_param("password"));
    }

    let (load_repo, update_repo, encrypter, token_generator) = self.dependencies()?;

    let Some(user) = load_repo.load(email).await? else {
      return Ok(AuthOutcome::Denied);
    };

    if !encrypter.compare(password, &user.password_hash).await? {
      return Ok(AuthOutcome::Denied);
    }

    let access_token = token_generator.generate(user.id).await?;
    update_repo.update(user.id, &access_token).await?;

    Ok(AuthOutcome::Granted(access_token))
  }

  /// Resolves all collaborators or fails with the first missing one
  ///
  /// Runs on every call rather than at construction so that misconfiguration
  /// surfaces only when the use case is actually exercised.
  #[allow(clippy::type_complexity)]
  fn dependencies(
    &self,
  ) -> Result<
    (
      &dyn LoadUserByEmailRepository,
      &dyn UpdateAccessTokenRepository,
      &dyn Encrypter,
      &dyn TokenGenerator,
    ),
    AuthError,
  > {
    let load_repo = self
      .deps
      .load_user_repository
      .as_deref()
      .ok_or(AuthError::MissingDependency("load user repository"))?;
    let update_repo = self
      .deps
      .update_access_token_repository
      .as_deref()
      .ok_or(AuthError::MissingDependency("update access token repository"))?;
    let encrypter = self
      .deps
      .encrypter
      .as_deref()
      .ok_or(AuthError::MissingDependency("encrypter"))?;
    let token_generator = self
      .deps
      .token_generator
      .as_deref()
      .ok_or(AuthError::MissingDependency("token generator"))?;

    Ok((load_repo, update_repo, encrypter, token_generator))
  }
}

#[async_trait]
impl Authenticator for AuthUseCase {
  async fn auth(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
    AuthUseCase::auth(self, email, password).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::User;
  use crate::domain::auth::errors::RepositoryError;
  use std::sync::Mutex;
  use uuid::Uuid;

  struct LoadUserSpy {
    user: Option<User>,
    seen_email: Mutex<Option<String>>,
  }

  impl LoadUserSpy {
    fn returning(user: Option<User>) -> Arc<Self> {
      Arc::new(Self {
        user,
        seen_email: Mutex::new(None),
      })
    }
  }

  #[async_trait]
  impl LoadUserByEmailRepository for LoadUserSpy {
    async fn load(&self, email: &str) -> Result<Option<User>, AuthError> {
      *self.seen_email.lock().unwrap() = Some(email.to_string());
      Ok(self.user.clone())
    }
  }

  struct UpdateTokenSpy {
    seen: Mutex<Option<(Uuid, String)>>,
  }

  impl UpdateTokenSpy {
    fn new() -> Arc<Self> {
      Arc::new(Self {
        seen: Mutex::new(None),
      })
    }
  }

  #[async_trait]
  impl UpdateAccessTokenRepository for UpdateTokenSpy {
    async fn update(&self, user_id: Uuid, access_token: &str) -> Result<(), AuthError> {
      *self.seen.lock().unwrap() = Some((user_id, access_token.to_string()));
      Ok(())
    }
  }

  struct EncrypterSpy {
    valid: bool,
    seen: Mutex<Option<(String, String)>>,
  }

  impl EncrypterSpy {
    fn returning(valid: bool) -> Arc<Self> {
      Arc::new(Self {
        valid,
        seen: Mutex::new(None),
      })
    }
  }

  #[async_trait]
  impl Encrypter for EncrypterSpy {
    async fn compare(&self, password: &str, hashed_password: &str) -> Result<bool, AuthError> {
      *self.seen.lock().unwrap() = Some((password.to_string(), hashed_password.to_string()));
      Ok(self.valid)
    }
  }

  struct TokenGeneratorSpy {
    access_token: String,
    seen_user_id: Mutex<Option<Uuid>>,
  }

  impl TokenGeneratorSpy {
    fn returning(access_token: &str) -> Arc<Self> {
      Arc::new(Self {
        access_token: access_token.to_string(),
        seen_user_id: Mutex::new(None),
      })
    }
  }

  #[async_trait]
  impl TokenGenerator for TokenGeneratorSpy {
    async fn generate(&self, user_id: Uuid) -> Result<String, AuthError> {
      *self.seen_user_id.lock().unwrap() = Some(user_id);
      Ok(self.access_token.clone())
    }
  }

  struct FailingLoad;

  #[async_trait]
  impl LoadUserByEmailRepository for FailingLoad {
    async fn load(&self, _email: &str) -> Result<Option<User>, AuthError> {
      Err(RepositoryError::QueryFailed("connection reset".to_string()).into())
    }
  }

  struct FailingUpdate;

  #[async_trait]
  impl UpdateAccessTokenRepository for FailingUpdate {
    async fn update(&self, _user_id: Uuid, _access_token: &str) -> Result<(), AuthError> {
      Err(RepositoryError::QueryFailed("connection reset".to_string()).into())
    }
  }

  struct FailingEncrypter;

  #[async_trait]
  impl Encrypter for FailingEncrypter {
    async fn compare(&self, _password: &str, _hashed_password: &str) -> Result<bool, AuthError> {
      Err(AuthError::Encrypter("corrupt hash".to_string()))
    }
  }

  struct FailingTokenGenerator;

  #[async_trait]
  impl TokenGenerator for FailingTokenGenerator {
    async fn generate(&self, _user_id: Uuid) -> Result<String, AuthError> {
      Err(AuthError::TokenGeneration("signing failed".to_string()))
    }
  }

  fn fake_user() -> User {
    User::new(Uuid::new_v4(), "hashed_password".to_string(), None)
  }

  struct Fixture {
    sut: AuthUseCase,
    load_spy: Arc<LoadUserSpy>,
    update_spy: Arc<UpdateTokenSpy>,
    encrypter_spy: Arc<EncrypterSpy>,
    token_spy: Arc<TokenGeneratorSpy>,
  }

  fn make_sut(user: Option<User>, password_matches: bool) -> Fixture {
    let load_spy = LoadUserSpy::returning(user);
    let update_spy = UpdateTokenSpy::new();
    let encrypter_spy = EncrypterSpy::returning(password_matches);
    let token_spy = TokenGeneratorSpy::returning("generated_token");

    let sut = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(load_spy.clone()),
      update_access_token_repository: Some(update_spy.clone()),
      encrypter: Some(encrypter_spy.clone()),
      token_generator: Some(token_spy.clone()),
    });

    Fixture {
      sut,
      load_spy,
      update_spy,
      encrypter_spy,
      token_spy,
    }
  }

  #[tokio::test]
  async fn test_fails_when_email_is_empty() {
    let fixture = make_sut(Some(fake_user()), true);

    let result = fixture.sut.auth("", "any_password").await;

    assert!(matches!(result, Err(AuthError::MissingParam(name)) if name == "email"));
  }

  #[tokio::test]
  async fn test_fails_when_password_is_empty() {
    let fixture = make_sut(Some(fake_user()), true);

    let result = fixture.sut.auth("any_email@mail.com", "").await;

    assert!(matches!(result, Err(AuthError::MissingParam(name)) if name == "password"));
  }

  #[tokio::test]
  async fn test_loads_user_with_given_email() {
    let fixture = make_sut(Some(fake_user()), true);

    fixture
      .sut
      .auth("any_email@mail.com", "any_password")
      .await
      .unwrap();

    assert_eq!(
      fixture.load_spy.seen_email.lock().unwrap().as_deref(),
      Some("any_email@mail.com")
    );
  }

  #[tokio::test]
  async fn test_denies_when_no_user_matches_email() {
    let fixture = make_sut(None, true);

    let outcome = fixture
      .sut
      .auth("unknown_email@mail.com", "any_password")
      .await
      .unwrap();

    assert_eq!(outcome, AuthOutcome::Denied);
  }

  #[tokio::test]
  async fn test_denies_when_password_does_not_match() {
    let fixture = make_sut(Some(fake_user()), false);

    let outcome = fixture
      .sut
      .auth("valid@mail.com", "wrong_password")
      .await
      .unwrap();

    assert_eq!(outcome, AuthOutcome::Denied);
  }

  #[tokio::test]
  async fn test_does_not_persist_token_when_password_does_not_match() {
    let fixture = make_sut(Some(fake_user()), false);

    fixture
      .sut
      .auth("valid@mail.com", "wrong_password")
      .await
      .unwrap();

    assert!(fixture.update_spy.seen.lock().unwrap().is_none());
    assert!(fixture.token_spy.seen_user_id.lock().unwrap().is_none());
  }

  #[tokio::test]
  async fn test_compares_password_against_stored_hash() {
    let fixture = make_sut(Some(fake_user()), true);

    fixture
      .sut
      .auth("valid@mail.com", "any_password")
      .await
      .unwrap();

    let seen = fixture.encrypter_spy.seen.lock().unwrap().clone();
    assert_eq!(
      seen,
      Some(("any_password".to_string(), "hashed_password".to_string()))
    );
  }

  #[tokio::test]
  async fn test_generates_token_for_matched_user_id() {
    let user = fake_user();
    let user_id = user.id;
    let fixture = make_sut(Some(user), true);

    fixture
      .sut
      .auth("valid@mail.com", "valid_password")
      .await
      .unwrap();

    assert_eq!(*fixture.token_spy.seen_user_id.lock().unwrap(), Some(user_id));
  }

  #[tokio::test]
  async fn test_grants_token_for_correct_credentials() {
    let fixture = make_sut(Some(fake_user()), true);

    let outcome = fixture
      .sut
      .auth("valid@mail.com", "valid_password")
      .await
      .unwrap();

    assert_eq!(outcome, AuthOutcome::Granted("generated_token".to_string()));
  }

  #[tokio::test]
  async fn test_persists_generated_token_for_matched_user() {
    let user = fake_user();
    let user_id = user.id;
    let fixture = make_sut(Some(user), true);

    fixture
      .sut
      .auth("valid@mail.com", "valid_password")
      .await
      .unwrap();

    let seen = fixture.update_spy.seen.lock().unwrap().clone();
    assert_eq!(seen, Some((user_id, "generated_token".to_string())));
  }

  #[tokio::test]
  async fn test_fails_when_dependencies_are_missing() {
    let full = || AuthDependencies {
      load_user_repository: Some(LoadUserSpy::returning(Some(fake_user()))),
      update_access_token_repository: Some(UpdateTokenSpy::new()),
      encrypter: Some(EncrypterSpy::returning(true)),
      token_generator: Some(TokenGeneratorSpy::returning("generated_token")),
    };

    let suts = [
      AuthUseCase::new(AuthDependencies::default()),
      AuthUseCase::new(AuthDependencies {
        load_user_repository: None,
        ..full()
      }),
      AuthUseCase::new(AuthDependencies {
        update_access_token_repository: None,
        ..full()
      }),
      AuthUseCase::new(AuthDependencies {
        encrypter: None,
        ..full()
      }),
      AuthUseCase::new(AuthDependencies {
        token_generator: None,
        ..full()
      }),
    ];

    for sut in &suts {
      let result = sut.auth("any_email@mail.com", "any_password").await;
      assert!(matches!(result, Err(AuthError::MissingDependency(_))));
    }
  }

  #[tokio::test]
  async fn test_dependency_check_runs_before_any_side_effect() {
    let load_spy = LoadUserSpy::returning(Some(fake_user()));
    let sut = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(load_spy.clone()),
      update_access_token_repository: None,
      encrypter: Some(EncrypterSpy::returning(true)),
      token_generator: Some(TokenGeneratorSpy::returning("generated_token")),
    });

    let result = sut.auth("any_email@mail.com", "any_password").await;

    assert!(matches!(result, Err(AuthError::MissingDependency(_))));
    assert!(load_spy.seen_email.lock().unwrap().is_none());
  }

  #[tokio::test]
  async fn test_propagates_collaborator_failures() {
    let failing_load = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(Arc::new(FailingLoad)),
      update_access_token_repository: Some(UpdateTokenSpy::new()),
      encrypter: Some(EncrypterSpy::returning(true)),
      token_generator: Some(TokenGeneratorSpy::returning("generated_token")),
    });
    let failing_update = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(LoadUserSpy::returning(Some(fake_user()))),
      update_access_token_repository: Some(Arc::new(FailingUpdate)),
      encrypter: Some(EncrypterSpy::returning(true)),
      token_generator: Some(TokenGeneratorSpy::returning("generated_token")),
    });
    let failing_encrypter = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(LoadUserSpy::returning(Some(fake_user()))),
      update_access_token_repository: Some(UpdateTokenSpy::new()),
      encrypter: Some(Arc::new(FailingEncrypter)),
      token_generator: Some(TokenGeneratorSpy::returning("generated_token")),
    });
    let failing_generator = AuthUseCase::new(AuthDependencies {
      load_user_repository: Some(LoadUserSpy::returning(Some(fake_user()))),
      update_access_token_repository: Some(UpdateTokenSpy::new()),
      encrypter: Some(EncrypterSpy::returning(true)),
      token_generator: Some(Arc::new(FailingTokenGenerator)),
    });

    for sut in [
      failing_load,
      failing_update,
      failing_encrypter,
      failing_generator,
    ] {
      let result = sut.auth("any_email@mail.com", "any_password").await;
      assert!(result.is_err());
    }
  }
}
