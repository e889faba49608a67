use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authgate::{
  adapters::http::{LoginRouter, RouterDependencies, configure_login_routes},
  application::auth::{AuthDependencies, AuthUseCase},
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresLoadUserByEmailRepository, PostgresUpdateAccessTokenRepository,
    },
    security::{Argon2Encrypter, JwtTokenGenerator},
    validation::EmailFormatValidator,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authgate=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting authgate");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    std::io::Error::other(format!("Database error: {}", e))
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let load_user_repo = Arc::new(PostgresLoadUserByEmailRepository::new(db_pool.clone()));
  let update_token_repo = Arc::new(PostgresUpdateAccessTokenRepository::new(db_pool.clone()));

  // Initialize security services
  let encrypter = Arc::new(Argon2Encrypter::new().expect("Failed to create encrypter"));
  let token_generator = Arc::new(JwtTokenGenerator::new(
    &config.security.jwt_secret,
    config.security.token_ttl_seconds,
  ));

  // Initialize use case and router
  let auth_use_case = Arc::new(AuthUseCase::new(AuthDependencies {
    load_user_repository: Some(load_user_repo),
    update_access_token_repository: Some(update_token_repo),
    encrypter: Some(encrypter),
    token_generator: Some(token_generator),
  }));

  let login_router = Arc::new(LoginRouter::new(RouterDependencies {
    auth_use_case: Some(auth_use_case),
    email_validator: Some(Arc::new(EmailFormatValidator)),
  }));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure API routes
      .service(
        web::scope("/api").configure(|cfg| configure_login_routes(cfg, login_router.clone())),
      )
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
