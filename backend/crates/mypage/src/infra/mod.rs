//! Infrastructure Layer
//!
//! Database, hashing and filesystem implementations of the domain traits.

pub mod file_store;
pub mod password;
pub mod postgres;

pub use file_store::DiskFileStore;
pub use password::Argon2MemberPasswordHasher;
pub use postgres::{PgMemberTx, PgUnitOfWork};
