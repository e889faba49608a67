use validator::ValidateEmail;

use crate::domain::auth::ports::EmailValidator;

/// Email format validator backed by the validator crate
pub struct EmailFormatValidator;

impl EmailValidator for EmailFormatValidator {
  fn is_valid(&self, email: &str) -> bool {
    email.validate_email()
  }
}
