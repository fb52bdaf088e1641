//! Repository Traits
//!
//! Interfaces for member persistence. Implementation is in the
//! infrastructure layer.

use std::future::Future;

use kernel::id::MemberNo;

use crate::domain::entity::member::Member;
use crate::error::MyPageResult;

/// Member record store
///
/// Update calls return the number of affected rows, passed through to the
/// caller unchanged.
#[trait_variant::make(MemberRepository: Send)]
pub trait LocalMemberRepository {
    /// Write nickname, phone and (already normalized) address
    async fn update_profile(&self, member: &Member) -> MyPageResult<u64>;

    /// Stored password hash of an active member
    async fn find_password_hash(&self, member_no: MemberNo) -> MyPageResult<Option<String>>;

    /// Write `member.member_pw`
    async fn update_password(&self, member: &Member) -> MyPageResult<u64>;

    /// Mark the member as deactivated; the row is kept
    async fn deactivate(&self, member_no: MemberNo) -> MyPageResult<u64>;
}

/// An open transaction; ends with exactly one of `commit` or `rollback`
pub trait Transaction: Send {
    fn commit(self) -> impl Future<Output = MyPageResult<()>> + Send;

    fn rollback(self) -> impl Future<Output = MyPageResult<()>> + Send;
}

/// Starts transactions that double as the member record store
pub trait UnitOfWork: Send + Sync {
    type Tx: MemberRepository + Transaction + Sync;

    fn begin(&self) -> impl Future<Output = MyPageResult<Self::Tx>> + Send;
}
