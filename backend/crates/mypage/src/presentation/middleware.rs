//! Login Member Extractor
//!
//! Authentication happens upstream: the session layer puts a
//! [`LoginMember`] into the request extensions. Handlers here only read it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::member::Member;
use crate::error::MyPageError;

/// The member the current request acts for
#[derive(Debug, Clone)]
pub struct LoginMember(pub Member);

impl<S> FromRequestParts<S> for LoginMember
where
    S: Send + Sync,
{
    type Rejection = MyPageError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<LoginMember>()
            .cloned()
            .ok_or(MyPageError::NotSignedIn)
    }
}
