//! Registration and login.
//!
//! Wraps a user repository and a password hasher. Secrets never reach the
//! logs: only usernames and outcomes are recorded.

use pathwise_types::error::{CredentialError, RepositoryError};
use pathwise_types::user::{ImportSummary, LegacyAccount, User, UserId};
use tracing::{debug, info, warn};

use crate::repository::user::UserRepository;
use crate::service::password::{PasswordCheck, PasswordHasher};

/// Service owning the credential rules.
///
/// Generic over repository and hasher traits -- pathwise-core never
/// depends on pathwise-infra.
pub struct CredentialService<R: UserRepository, H: PasswordHasher> {
    users: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> CredentialService<R, H> {
    pub fn new(users: R, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Create an account.
    ///
    /// Returns `Ok(false)` when the username or email is already taken.
    /// Validation failures (missing fields, mismatched confirmation,
    /// malformed email) are errors.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
        email: &str,
    ) -> Result<bool, CredentialError> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() {
            return Err(CredentialError::validation("username", "is required"));
        }
        if email.is_empty() {
            return Err(CredentialError::validation("email", "is required"));
        }
        if password.is_empty() {
            return Err(CredentialError::validation("password", "is required"));
        }
        if password != confirm_password {
            return Err(CredentialError::validation("password", "passwords do not match"));
        }
        if !email.contains('@') {
            return Err(CredentialError::validation("email", "must contain '@'"));
        }

        let user = User {
            id: UserId::new(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: self.hasher.hash(password)?,
            created_at: chrono::Utc::now(),
        };

        match self.users.create(&user).await {
            Ok(_) => {
                info!(username, "user registered");
                Ok(true)
            }
            Err(RepositoryError::Conflict(field)) => {
                info!(username, conflict = %field, "registration rejected: duplicate account");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check a username/password pair.
    ///
    /// A correct password stored under a legacy hash is re-hashed with the
    /// current scheme. Failing to store the upgraded hash does not fail the
    /// login.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        let Some(user) = self.users.get_by_username(username.trim()).await? else {
            debug!(username, "login rejected: unknown user");
            return Ok(false);
        };

        match self.hasher.verify(password, &user.password_hash)? {
            PasswordCheck::Valid => {
                info!(username = %user.username, "login succeeded");
                Ok(true)
            }
            PasswordCheck::ValidNeedsRehash => {
                info!(username = %user.username, "login succeeded; upgrading password hash");
                let upgraded = self.hasher.hash(password)?;
                if let Err(e) = self.users.update_password_hash(&user.id, &upgraded).await {
                    warn!(username = %user.username, error = %e, "failed to store upgraded hash");
                }
                Ok(true)
            }
            PasswordCheck::Invalid => {
                debug!(username = %user.username, "login rejected: wrong password");
                Ok(false)
            }
        }
    }

    /// Copy accounts from an earlier credential database.
    ///
    /// Hashes are stored as-is and upgraded by [`authenticate`](Self::authenticate)
    /// on each user's next login. Accounts that already exist locally are
    /// left alone.
    pub async fn import_legacy(
        &self,
        accounts: &[LegacyAccount],
    ) -> Result<ImportSummary, CredentialError> {
        let mut summary = ImportSummary::default();

        for account in accounts {
            let username = account.username.trim();
            let email = account.email.trim();
            let acceptable = !username.is_empty()
                && email.contains('@')
                && self.hasher.is_legacy(&account.password_hash);
            if !acceptable {
                warn!(username, "legacy account rejected");
                summary.rejected += 1;
                continue;
            }

            let user = User {
                id: UserId::new(),
                username: username.to_string(),
                email: email.to_string(),
                password_hash: account.password_hash.clone(),
                created_at: account.created_at.unwrap_or_else(chrono::Utc::now),
            };
            match self.users.create(&user).await {
                Ok(_) => summary.imported += 1,
                Err(RepositoryError::Conflict(field)) => {
                    debug!(username, conflict = %field, "legacy account already present");
                    summary.existing += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            imported = summary.imported,
            existing = summary.existing,
            rejected = summary.rejected,
            "legacy import finished"
        );
        Ok(summary)
    }
}
