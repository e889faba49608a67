pub mod load_user_repository;
pub mod update_access_token_repository;

pub use load_user_repository::PostgresLoadUserByEmailRepository;
pub use update_access_token_repository::PostgresUpdateAccessTokenRepository;
