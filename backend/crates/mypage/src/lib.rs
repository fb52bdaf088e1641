//! My Page Backend Module
//!
//! Profile and credential management for a signed-in member.
//!
//! Clean Architecture structure:
//! - `domain/` - Member entity, address encoding, repository and collaborator traits
//! - `application/` - One use case per operation, explicit transaction handling
//! - `infra/` - PostgreSQL store, Argon2id hasher, on-disk file store
//! - `presentation/` - HTTP handlers, DTOs, router, login-member extractor
//!
//! ## Operations
//! - Update profile (nickname, phone, address)
//! - Change password after verifying the current one
//! - Deactivate (soft delete) the account after password confirmation
//! - Store an uploaded file and return its public path
//!
//! A rejected password check is not an error: the operation returns `0`
//! affected rows and changes nothing.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::config::MyPageConfig;
pub use error::{MyPageError, MyPageResult};
pub use infra::{Argon2MemberPasswordHasher, DiskFileStore, PgUnitOfWork};
pub use presentation::router::mypage_router;

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod test_support;
