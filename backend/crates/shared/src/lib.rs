//! Shared Kernel
//!
//! Vocabulary every backend crate agrees on:
//! - `AppError` / `ErrorKind` and the `AppResult` alias
//! - Typed numeric identifiers
//!
//! Anything domain specific belongs in the owning crate, not here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
