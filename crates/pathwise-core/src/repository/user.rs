//! User repository trait definition.

use pathwise_types::error::RepositoryError;
use pathwise_types::user::{User, UserId};

/// Repository trait for registered accounts.
///
/// Implementations live in pathwise-infra (e.g., SqliteUserRepository).
/// Usernames and emails are unique; inserting a duplicate of either must
/// fail with `RepositoryError::Conflict`.
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Returns the stored user.
    fn create(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Look up a user by exact username.
    fn get_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Replace the stored password hash (used when upgrading legacy hashes).
    fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
