//! My Page Router

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::application::config::{FILES_ROUTE, MyPageConfig};
use crate::domain::repository::UnitOfWork;
use crate::domain::service::{FileStore, PasswordHasher};
use crate::presentation::handlers::{self, MyPageAppState};

/// Create the My Page router.
///
/// Meant to be nested under `/myPage`: stored files are then served from
/// `/myPage/file/{name}`, which is the default `upload_url_prefix`.
pub fn mypage_router<U, H, F>(uow: U, hasher: H, files: F, config: MyPageConfig) -> Router
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    let serve_uploads = ServeDir::new(&config.upload_dir);
    let body_limit = DefaultBodyLimit::max(config.max_upload_bytes);

    let state = MyPageAppState {
        uow: Arc::new(uow),
        hasher: Arc::new(hasher),
        files: Arc::new(files),
        config: Arc::new(config),
    };

    Router::new()
        .route("/info", post(handlers::update_info::<U, H, F>))
        .route("/changePw", post(handlers::change_pw::<U, H, F>))
        .route("/secession", post(handlers::secession::<U, H, F>))
        .route(
            "/upload",
            post(handlers::upload_file::<U, H, F>).layer(body_limit),
        )
        .nest_service(FILES_ROUTE, serve_uploads)
        .with_state(state)
}
