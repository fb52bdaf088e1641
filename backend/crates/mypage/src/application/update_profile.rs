//! Update Profile Use Case
//!
//! Writes nickname, phone and address of the signed-in member.

use crate::domain::entity::member::Member;
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::address::AddressParts;
use crate::error::MyPageResult;

/// Update profile use case
pub struct UpdateProfileUseCase<'a, R>
where
    R: MemberRepository + Sync,
{
    repo: &'a R,
}

impl<'a, R> UpdateProfileUseCase<'a, R>
where
    R: MemberRepository + Sync,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// Normalize the address on `member` and persist the profile.
    ///
    /// `member.member_address` must hold the submitted form value; it holds
    /// the stored value (or `None`) afterwards. Returns the affected rows.
    pub async fn execute(&self, member: &mut Member, address: &AddressParts) -> MyPageResult<u64> {
        member.normalize_address(address);

        let rows = self.repo.update_profile(member).await?;

        tracing::info!(
            member_no = %member.member_no,
            has_address = member.member_address.is_some(),
            rows,
            "Member profile updated"
        );

        Ok(rows)
    }
}
