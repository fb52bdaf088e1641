//! Argon2id password hasher

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::service::PasswordHasher;
use crate::error::{MyPageError, MyPageResult};

/// [`PasswordHasher`] backed by `platform::password`
#[derive(Clone, Default)]
pub struct Argon2MemberPasswordHasher {
    pepper: Option<Vec<u8>>,
}

impl Argon2MemberPasswordHasher {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }
}

impl PasswordHasher for Argon2MemberPasswordHasher {
    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        // A column that does not hold a PHC string can never match
        let Ok(stored) = HashedPassword::from_phc_string(hash) else {
            tracing::warn!("Stored password hash is not a PHC string");
            return false;
        };
        stored.verify(&ClearTextPassword::new(plaintext), self.pepper.as_deref())
    }

    fn hash(&self, plaintext: &str) -> MyPageResult<String> {
        let hashed = ClearTextPassword::new(plaintext)
            .hash(self.pepper.as_deref())
            .map_err(|e| MyPageError::PasswordHash(e.to_string()))?;
        Ok(hashed.into_phc_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2MemberPasswordHasher::default();
        let hash = hasher.hash("pass01!").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("pass01!", &hash));
        assert!(!hasher.verify("pass02!", &hash));
    }

    #[test]
    fn test_pepper_must_match() {
        let peppered = Argon2MemberPasswordHasher::new(Some(b"pepper".to_vec()));
        let plain = Argon2MemberPasswordHasher::default();
        let hash = peppered.hash("pass01!").unwrap();

        assert!(peppered.verify("pass01!", &hash));
        assert!(!plain.verify("pass01!", &hash));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        let hasher = Argon2MemberPasswordHasher::default();
        assert!(!hasher.verify("pass01!", ""));
        assert!(!hasher.verify("pass01!", "pass01!"));
    }
}
