mod argon2_encrypter;
mod jwt_token_generator;

pub use argon2_encrypter::Argon2Encrypter;
pub use jwt_token_generator::JwtTokenGenerator;
