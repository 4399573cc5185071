//! Credential signup/login use-case service.
//!
//! # Responsibility
//! - Compute one-way password digests and orchestrate credential storage.
//! - Keep digest semantics out of the repository layer.
//!
//! # Invariants
//! - Plaintext passwords never leave this module's stack frames.
//! - Login is stateless: every call re-verifies the digest; no session
//!   token is issued.
//! - Unknown username and digest mismatch are indistinguishable to the
//!   caller.

use crate::repo::credential_repo::CredentialRepository;
use crate::repo::student_repo::RepoResult;
use log::info;
use sha2::{Digest, Sha256};

/// Result of a signup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Credential record was created.
    Created,
    /// Username already exists; nothing was written.
    UsernameTaken,
}

/// Identity returned to the caller after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub contact_email: Option<String>,
}

/// Use-case service wrapper for signup and login.
pub struct AuthService<R: CredentialRepository> {
    repo: R,
}

impl<R: CredentialRepository> AuthService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Computes the hex-encoded SHA-256 digest of a plaintext password.
    pub fn password_digest(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Creates a credential record for a new user.
    ///
    /// # Contract
    /// - The plaintext password is digested before storage.
    /// - An existing username is reported, not overwritten.
    pub fn sign_up(
        &self,
        username: &str,
        password: &str,
        contact_email: Option<&str>,
    ) -> RepoResult<SignupOutcome> {
        let digest = Self::password_digest(password);

        if self.repo.create_user(username, &digest, contact_email)? {
            info!("event=signup module=service status=ok username={username}");
            Ok(SignupOutcome::Created)
        } else {
            info!("event=signup module=service status=rejected reason=username_taken username={username}");
            Ok(SignupOutcome::UsernameTaken)
        }
    }

    /// Verifies a username/password pair against the stored digest.
    ///
    /// Returns `None` for unknown usernames and digest mismatches alike.
    pub fn log_in(&self, username: &str, password: &str) -> RepoResult<Option<AuthenticatedUser>> {
        let Some(credential) = self.repo.find_by_username(username)? else {
            info!("event=login module=service status=rejected username={username}");
            return Ok(None);
        };

        if Self::password_digest(password) != credential.password_digest {
            info!("event=login module=service status=rejected username={username}");
            return Ok(None);
        }

        info!("event=login module=service status=ok username={username}");
        Ok(Some(AuthenticatedUser {
            username: credential.username,
            contact_email: credential.contact_email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::AuthService;
    use crate::repo::credential_repo::SqliteCredentialRepository;

    type Service<'conn> = AuthService<SqliteCredentialRepository<'conn>>;

    #[test]
    fn password_digest_is_stable_sha256_hex() {
        assert_eq!(
            Service::password_digest("secret"),
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[test]
    fn password_digest_differs_per_input() {
        assert_ne!(
            Service::password_digest("secret"),
            Service::password_digest("Secret")
        );
    }
}
