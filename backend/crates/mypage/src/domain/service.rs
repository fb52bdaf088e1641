//! Collaborator Traits
//!
//! Capabilities the use cases need besides the record store.

use crate::domain::value_object::upload::StoredFileName;
use crate::error::MyPageResult;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// `false` for a wrong password and for a hash that cannot be parsed
    fn verify(&self, plaintext: &str, hash: &str) -> bool;

    fn hash(&self, plaintext: &str) -> MyPageResult<String>;
}

/// Destination for uploaded files
#[trait_variant::make(FileStore: Send)]
pub trait LocalFileStore {
    /// Write `bytes` under `file_name`, replacing an existing file
    async fn store(&self, file_name: &StoredFileName, bytes: &[u8]) -> MyPageResult<()>;
}
