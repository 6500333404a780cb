//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `pathwise-core` with the
//! `argon2` crate (RustCrypto ecosystem). New hashes are PHC strings with a
//! random salt. Accounts created under the older scheme store a bare,
//! unsalted SHA-256 hex digest; those still verify and are reported as
//! needing a rehash.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use sha2::{Digest, Sha256};

use pathwise_core::service::password::{PasswordCheck, PasswordHasher};
use pathwise_types::error::CredentialError;

/// Argon2id implementation of `PasswordHasher` (default parameters).
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lowercase hex SHA-256 digest, the legacy stored format.
pub fn legacy_sha256_hex(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

fn is_legacy_hash(stored: &str) -> bool {
    stored.len() == 64 && stored.chars().all(|c| c.is_ascii_hexdigit())
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<PasswordCheck, CredentialError> {
        if is_legacy_hash(stored) {
            let matches = legacy_sha256_hex(password).eq_ignore_ascii_case(stored);
            return Ok(if matches {
                PasswordCheck::ValidNeedsRehash
            } else {
                PasswordCheck::Invalid
            });
        }

        let parsed =
            PasswordHash::new(stored).map_err(|e| CredentialError::Hashing(e.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(PasswordCheck::Valid),
            Err(password_hash::Error::Password) => Ok(PasswordCheck::Invalid),
            Err(e) => Err(CredentialError::Hashing(e.to_string())),
        }
    }

    fn is_legacy(&self, stored: &str) -> bool {
        is_legacy_hash(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_phc_string() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("hunter2").unwrap();
        let second = hasher.hash("hunter2").unwrap();
        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second, "salts must differ");
    }

    #[test]
    fn test_verify_roundtrip() {
        let hasher = Argon2PasswordHasher::new();
        let stored = hasher.hash("correct horse").unwrap();
        assert_eq!(hasher.verify("correct horse", &stored).unwrap(), PasswordCheck::Valid);
        assert_eq!(hasher.verify("wrong", &stored).unwrap(), PasswordCheck::Invalid);
    }

    #[test]
    fn test_legacy_sha256_needs_rehash() {
        let hasher = Argon2PasswordHasher::new();
        let stored = legacy_sha256_hex("password");
        assert_eq!(
            stored,
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
        assert_eq!(
            hasher.verify("password", &stored).unwrap(),
            PasswordCheck::ValidNeedsRehash
        );
        assert_eq!(hasher.verify("Password", &stored).unwrap(), PasswordCheck::Invalid);
    }

    #[test]
    fn test_is_legacy_only_for_sha256_hex() {
        let hasher = Argon2PasswordHasher::new();
        assert!(hasher.is_legacy(&legacy_sha256_hex("pw")));
        assert!(!hasher.is_legacy(&hasher.hash("pw").unwrap()));
        assert!(!hasher.is_legacy("abc123"));
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let hasher = Argon2PasswordHasher::new();
        assert!(hasher.verify("x", "not-a-hash").is_err());
    }
}
