//! HTTP Handlers

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::MyPageConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, SecessionUseCase, StoreUploadUseCase,
    UpdateProfileUseCase, finish,
};
use crate::domain::repository::UnitOfWork;
use crate::domain::service::{FileStore, PasswordHasher};
use crate::domain::value_object::address::AddressParts;
use crate::domain::value_object::upload::UploadedFile;
use crate::error::{MyPageError, MyPageResult};
use crate::presentation::dto::{
    ChangePwRequest, MyPageResultResponse, SecessionRequest, UpdateInfoRequest, UploadResponse,
};
use crate::presentation::middleware::LoginMember;

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "uploadFile";

/// Shared state for my page handlers
pub struct MyPageAppState<U, H, F>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    pub uow: Arc<U>,
    pub hasher: Arc<H>,
    pub files: Arc<F>,
    pub config: Arc<MyPageConfig>,
}

// Manual impl: only the Arcs are cloned, the collaborators need not be Clone
impl<U, H, F> Clone for MyPageAppState<U, H, F>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            uow: self.uow.clone(),
            hasher: self.hasher.clone(),
            files: self.files.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// POST /myPage/info
pub async fn update_info<U, H, F>(
    State(state): State<MyPageAppState<U, H, F>>,
    LoginMember(login_member): LoginMember,
    Json(req): Json<UpdateInfoRequest>,
) -> MyPageResult<Json<MyPageResultResponse>>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    let address = AddressParts::from(req.member_address);

    let mut member = login_member;
    member.member_nickname = req.member_nickname;
    member.member_tel = req.member_tel;
    member.member_address = Some(address.to_form_value());

    let tx = state.uow.begin().await?;
    let result = UpdateProfileUseCase::new(&tx)
        .execute(&mut member, &address)
        .await;
    let rows = finish(tx, result).await?;

    Ok(Json(MyPageResultResponse::new(
        rows,
        "Member information updated",
        "Member information could not be updated",
    )))
}

// ============================================================================
// Password
// ============================================================================

/// POST /myPage/changePw
pub async fn change_pw<U, H, F>(
    State(state): State<MyPageAppState<U, H, F>>,
    LoginMember(login_member): LoginMember,
    Json(req): Json<ChangePwRequest>,
) -> MyPageResult<Json<MyPageResultResponse>>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    let input = ChangePasswordInput {
        current_pw: req.current_pw,
        new_pw: req.new_pw,
    };
    let mut member = login_member;

    let tx = state.uow.begin().await?;
    let result = ChangePasswordUseCase::new(&tx, state.hasher.as_ref())
        .execute(input, &mut member)
        .await;
    let rows = finish(tx, result).await?;

    Ok(Json(MyPageResultResponse::new(
        rows,
        "Password changed",
        "Current password does not match",
    )))
}

/// POST /myPage/secession
pub async fn secession<U, H, F>(
    State(state): State<MyPageAppState<U, H, F>>,
    LoginMember(login_member): LoginMember,
    Json(req): Json<SecessionRequest>,
) -> MyPageResult<Json<MyPageResultResponse>>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    let tx = state.uow.begin().await?;
    let result = SecessionUseCase::new(&tx, state.hasher.as_ref())
        .execute(&req.member_pw, login_member.member_no)
        .await;
    let rows = finish(tx, result).await?;

    Ok(Json(MyPageResultResponse::new(
        rows,
        "Account deactivated",
        "Password does not match",
    )))
}

// ============================================================================
// Upload
// ============================================================================

/// POST /myPage/upload
pub async fn upload_file<U, H, F>(
    State(state): State<MyPageAppState<U, H, F>>,
    LoginMember(login_member): LoginMember,
    mut multipart: Multipart,
) -> MyPageResult<Json<UploadResponse>>
where
    U: UnitOfWork + 'static,
    H: PasswordHasher + 'static,
    F: FileStore + Send + Sync + 'static,
{
    let mut upload = UploadedFile::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(upload_error)?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(upload_error)?;

        upload = UploadedFile::new(file_name, bytes);
        break;
    }

    tracing::debug!(
        member_no = %login_member.member_no,
        file_name = upload.original_name(),
        size = upload.len(),
        "Upload received"
    );

    let path = StoreUploadUseCase::new(state.files.as_ref(), &state.config)
        .execute(upload)
        .await?;

    Ok(Json(UploadResponse { path }))
}

/// The body limit surfaces as a multipart error; keep its 413
fn upload_error(err: MultipartError) -> MyPageError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MyPageError::UploadTooLarge(err.body_text())
    } else {
        MyPageError::InvalidUpload(err.body_text())
    }
}
