//! Change Password Use Case
//!
//! Replaces the password hash after the current password is confirmed.

use std::fmt;

use crate::domain::entity::member::Member;
use crate::domain::repository::MemberRepository;
use crate::domain::service::PasswordHasher;
use crate::error::MyPageResult;

/// Change password input
pub struct ChangePasswordInput {
    pub current_pw: String,
    pub new_pw: String,
}

impl fmt::Debug for ChangePasswordInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordInput")
            .field("current_pw", &"[REDACTED]")
            .field("new_pw", &"[REDACTED]")
            .finish()
    }
}

/// Change password use case
pub struct ChangePasswordUseCase<'a, R, H>
where
    R: MemberRepository + Sync,
    H: PasswordHasher,
{
    repo: &'a R,
    hasher: &'a H,
}

impl<'a, R, H> ChangePasswordUseCase<'a, R, H>
where
    R: MemberRepository + Sync,
    H: PasswordHasher,
{
    pub fn new(repo: &'a R, hasher: &'a H) -> Self {
        Self { repo, hasher }
    }

    /// Returns the affected rows, or `0` when `current_pw` does not match.
    ///
    /// On success `member.member_pw` holds the new hash.
    pub async fn execute(
        &self,
        input: ChangePasswordInput,
        member: &mut Member,
    ) -> MyPageResult<u64> {
        let stored_hash = self.repo.find_password_hash(member.member_no).await?;

        let current_ok = stored_hash
            .as_deref()
            .is_some_and(|hash| self.hasher.verify(&input.current_pw, hash));

        if !current_ok {
            tracing::warn!(
                member_no = %member.member_no,
                "Password change rejected: current password mismatch"
            );
            return Ok(0);
        }

        let new_hash = self.hasher.hash(&input.new_pw)?;
        member.set_password_hash(new_hash);

        let rows = self.repo.update_password(member).await?;

        tracing::info!(member_no = %member.member_no, rows, "Member password changed");

        Ok(rows)
    }
}
