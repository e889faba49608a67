use actix_web::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::auth::entities::AuthOutcome;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{Authenticator, EmailValidator};

use super::dtos::{ErrorResponse, LoginBody, TokenResponse};
use super::errors::ApiError;

/// Transport-level request as seen by the login router
///
/// The body is optional: a missing or unparseable payload arrives here as
/// `None` and is answered with a generic fault, since a request without a
/// body is a transport defect rather than a validation failure.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
  pub body: Option<LoginBody>,
}

/// Body of a transport-level response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
  Token(TokenResponse),
  Error(ErrorResponse),
}

/// Transport-level response produced by the login router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status_code: StatusCode,
  pub body: ResponseBody,
}

impl HttpResponse {
  /// Successful login response carrying the access token
  pub fn ok(access_token: String) -> Self {
    Self {
      status_code: StatusCode::OK,
      body: ResponseBody::Token(TokenResponse { access_token }),
    }
  }
}

impl From<ApiError> for HttpResponse {
  fn from(error: ApiError) -> Self {
    Self {
      status_code: error.status_code(),
      body: ResponseBody::Error(ErrorResponse {
        error: error.message(),
      }),
    }
  }
}

/// Collaborators required by [`LoginRouter`]
///
/// Optional for the same reason as the use case's dependencies: the contract
/// is checked when a request is routed, not at construction.
#[derive(Default)]
pub struct RouterDependencies {
  pub auth_use_case: Option<Arc<dyn Authenticator>>,
  pub email_validator: Option<Arc<dyn EmailValidator>>,
}

/// Adapter translating a transport request into the authentication use case
/// and its outcome back into a transport response
///
/// Terminal in one pass: shape check, then parameter presence, then email
/// format, then authentication. Every error reaching the catch-all is folded
/// into the same generic fault response; the original detail is only logged.
pub struct LoginRouter {
  deps: RouterDependencies,
}

impl LoginRouter {
  /// Creates a new instance of LoginRouter
  pub fn new(deps: RouterDependencies) -> Self {
    Self { deps }
  }

  /// Routes a login request to a terminal response
  ///
  /// Never returns an error; faults become the generic 500 response.
  pub async fn route(&self, request: Option<HttpRequest>) -> HttpResponse {
    match self.handle(request).await {
      Ok(response) => response,
      Err(error) => {
        tracing::error!(%error, "login request failed");
        ApiError::ServerFault.into()
      }
    }
  }

  async fn handle(&self, request: Option<HttpRequest>) -> Result<HttpResponse, AuthError> {
    let Some(body) = request.and_then(|request| request.body) else {
      return Ok(ApiError::ServerFault.into());
    };

    let Some(email) = body.email.filter(|email| !email.is_empty()) else {
      return Ok(ApiError::MissingParam("email".to_string()).into());
    };
    let Some(password) = body.password.filter(|password| !password.is_empty()) else {
      return Ok(ApiError::MissingParam("password".to_string()).into());
    };

    let (auth_use_case, email_validator) = self.dependencies()?;

    if !email_validator.is_valid(&email) {
      return Ok(ApiError::InvalidParam("email".to_string()).into());
    }

    match auth_use_case.auth(&email, &password).await? {
      AuthOutcome::Granted(access_token) => Ok(HttpResponse::ok(access_token)),
      AuthOutcome::Denied => Ok(ApiError::Unauthorized.into()),
    }
  }

  fn dependencies(&self) -> Result<(&dyn Authenticator, &dyn EmailValidator), AuthError> {
    let auth_use_case = self
      .deps
      .auth_use_case
      .as_deref()
      .ok_or(AuthError::MissingDependency("auth use case"))?;
    let email_validator = self
      .deps
      .email_validator
      .as_deref()
      .ok_or(AuthError::MissingDependency("email validator"))?;

    Ok((auth_use_case, email_validator))
  }
}
