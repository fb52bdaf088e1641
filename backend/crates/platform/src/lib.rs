//! Platform Crate - Technical Infrastructure
//!
//! Primitives with no domain meaning:
//! - Password hashing (Argon2id, PHC strings, zeroized clear text)
//! - Upload directory with file-name validation

pub mod password;
pub mod upload;
