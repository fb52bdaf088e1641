//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the login-member extractor.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::MyPageAppState;
pub use middleware::LoginMember;
pub use router::mypage_router;
