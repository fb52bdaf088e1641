//! Secession Use Case
//!
//! Deactivates the account once the password is confirmed. The record
//! store decides what deactivation means; the row is never deleted here.

use kernel::id::MemberNo;

use crate::domain::repository::MemberRepository;
use crate::domain::service::PasswordHasher;
use crate::error::MyPageResult;

/// Secession (account deactivation) use case
pub struct SecessionUseCase<'a, R, H>
where
    R: MemberRepository + Sync,
    H: PasswordHasher,
{
    repo: &'a R,
    hasher: &'a H,
}

impl<'a, R, H> SecessionUseCase<'a, R, H>
where
    R: MemberRepository + Sync,
    H: PasswordHasher,
{
    pub fn new(repo: &'a R, hasher: &'a H) -> Self {
        Self { repo, hasher }
    }

    /// Returns the affected rows, or `0` when the password does not match
    pub async fn execute(&self, member_pw: &str, member_no: MemberNo) -> MyPageResult<u64> {
        let stored_hash = self.repo.find_password_hash(member_no).await?;

        let confirmed = stored_hash
            .as_deref()
            .is_some_and(|hash| self.hasher.verify(member_pw, hash));

        if !confirmed {
            tracing::warn!(%member_no, "Secession rejected: password mismatch");
            return Ok(0);
        }

        let rows = self.repo.deactivate(member_no).await?;

        tracing::info!(%member_no, rows, "Member deactivated");

        Ok(rows)
    }
}
