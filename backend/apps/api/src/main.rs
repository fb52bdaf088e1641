//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use mypage::{Argon2MemberPasswordHasher, DiskFileStore, MyPageConfig, PgUnitOfWork, mypage_router};
use platform::upload::UploadDir;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,mypage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // My page configuration
    let mypage_config = load_mypage_config()?;

    let files = DiskFileStore::new(UploadDir::new(&mypage_config.upload_dir));
    files
        .prepare()
        .await
        .with_context(|| format!("cannot create {}", mypage_config.upload_dir.display()))?;

    tracing::info!(
        upload_dir = %mypage_config.upload_dir.display(),
        url_prefix = %mypage_config.upload_url_prefix,
        "Upload directory ready"
    );

    let hasher = Argon2MemberPasswordHasher::new(mypage_config.password_pepper.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest(
            "/myPage",
            mypage_router(PgUnitOfWork::new(pool), hasher, files, mypage_config),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("API_PORT") {
        Ok(port) => port.parse().context("API_PORT must be a port number")?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build [`MyPageConfig`] from the environment, keeping defaults for unset values
fn load_mypage_config() -> anyhow::Result<MyPageConfig> {
    let mut config = match env::var("MYPAGE_UPLOAD_DIR") {
        Ok(dir) => MyPageConfig::with_upload_dir(dir),
        Err(_) => MyPageConfig::default(),
    };

    if let Ok(prefix) = env::var("MYPAGE_UPLOAD_URL_PREFIX") {
        config.upload_url_prefix = prefix;
    }

    if let Ok(max) = env::var("MYPAGE_MAX_UPLOAD_BYTES") {
        config.max_upload_bytes = max
            .parse()
            .context("MYPAGE_MAX_UPLOAD_BYTES must be a byte count")?;
    }

    // In production, the pepper comes from the environment
    match env::var("PASSWORD_PEPPER") {
        Ok(pepper_b64) => {
            let pepper = Engine::decode(&general_purpose::STANDARD, pepper_b64.trim())
                .context("PASSWORD_PEPPER must be base64")?;
            config.password_pepper = Some(pepper);
        }
        Err(_) if cfg!(debug_assertions) => {}
        Err(_) => tracing::warn!("PASSWORD_PEPPER not set, hashing without pepper"),
    }

    config
        .validate()
        .context("MYPAGE_UPLOAD_URL_PREFIX does not match the served upload route")?;

    Ok(config)
}
