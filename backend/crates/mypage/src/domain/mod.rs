//! Domain Layer
//!
//! Entities, value objects, repository traits and the collaborator traits
//! the use cases depend on.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

pub use entity::member::Member;
pub use repository::{MemberRepository, Transaction, UnitOfWork};
pub use service::{FileStore, PasswordHasher};
