//! Application Layer
//!
//! One use case per operation. Use cases borrow their collaborators for the
//! duration of a request; the caller owns the transaction.

pub mod change_password;
pub mod config;
pub mod secession;
pub mod store_upload;
pub mod transaction;
pub mod update_profile;

// Re-exports
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::MyPageConfig;
pub use secession::SecessionUseCase;
pub use store_upload::StoreUploadUseCase;
pub use transaction::finish;
pub use update_profile::UpdateProfileUseCase;
