//! PasswordHasher trait for one-way credential hashing.
//!
//! Defined in pathwise-core so the credential service can hash and verify
//! passwords without coupling to a specific algorithm. The argon2 adapter
//! lives in pathwise-infra.

use pathwise_types::error::CredentialError;

/// Outcome of checking a password against a stored hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Valid,
    /// Correct password, but the stored hash uses an outdated scheme and
    /// should be replaced.
    ValidNeedsRehash,
    Invalid,
}

impl PasswordCheck {
    pub fn is_valid(&self) -> bool {
        !matches!(self, PasswordCheck::Invalid)
    }
}

/// Abstraction over salted one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a password against a stored hash.
    fn verify(&self, password: &str, stored: &str) -> Result<PasswordCheck, CredentialError>;

    /// Whether `stored` is in the outdated format that `verify` still
    /// accepts and reports as [`PasswordCheck::ValidNeedsRehash`].
    fn is_legacy(&self, stored: &str) -> bool;
}
