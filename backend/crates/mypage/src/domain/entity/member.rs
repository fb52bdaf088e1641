//! Member Entity
//!
//! The in-memory copy of a member row that the caller hands to the use
//! cases. The record store owns the row; this copy is mutated and passed
//! back to it.

use kernel::id::MemberNo;

use crate::domain::value_object::address::{AddressParts, is_empty_form_value};

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Database key, never changes
    pub member_no: MemberNo,
    /// Login email (read-only here)
    pub member_email: String,
    pub member_nickname: String,
    pub member_tel: String,
    /// Form value before [`Member::normalize_address`], stored value after.
    /// `None` means no address.
    pub member_address: Option<String>,
    /// New PHC hash, only set by the change-password flow
    pub member_pw: Option<String>,
}

impl Member {
    pub fn new(member_no: MemberNo, member_email: impl Into<String>) -> Self {
        Self {
            member_no,
            member_email: member_email.into(),
            member_nickname: String::new(),
            member_tel: String::new(),
            member_address: None,
            member_pw: None,
        }
    }

    /// Turn the submitted address into its stored form.
    ///
    /// An empty form value (`",,"`) or no value at all clears the address;
    /// anything else is replaced by `parts` joined with `^^^`.
    pub fn normalize_address(&mut self, parts: &AddressParts) {
        self.member_address = match self.member_address.as_deref() {
            Some(form_value) if !is_empty_form_value(form_value) => Some(parts.to_stored()),
            _ => None,
        };
    }

    /// Stored address split back into parts
    pub fn address_parts(&self) -> Option<AddressParts> {
        self.member_address
            .as_deref()
            .and_then(AddressParts::from_stored)
    }

    pub fn set_password_hash(&mut self, hash: String) {
        self.member_pw = Some(hash);
    }
}
