//! Credential repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/find APIs over the `users` table.
//!
//! # Invariants
//! - `username` uniqueness is enforced at creation by the primary key; an
//!   existing record is never overwritten.
//! - `created_at` is assigned by the store at insert, in epoch ms.
//! - Digest comparison is the caller's concern; this layer only stores and
//!   returns digests.

use crate::model::credential::UserCredential;
use crate::repo::student_repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

/// Repository interface for credential operations.
pub trait CredentialRepository {
    /// Inserts one credential record. Returns `false` when the username is
    /// already taken, leaving the existing record untouched.
    fn create_user(
        &self,
        username: &str,
        password_digest: &str,
        contact_email: Option<&str>,
    ) -> RepoResult<bool>;
    /// Loads one credential record by username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<UserCredential>>;
}

/// SQLite-backed credential repository.
pub struct SqliteCredentialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCredentialRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "users",
            &["username", "password_digest", "contact_email", "created_at"],
        )?;
        Ok(Self { conn })
    }
}

impl CredentialRepository for SqliteCredentialRepository<'_> {
    fn create_user(
        &self,
        username: &str,
        password_digest: &str,
        contact_email: Option<&str>,
    ) -> RepoResult<bool> {
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password_digest, contact_email, created_at)
             VALUES (?1, ?2, ?3, (strftime('%s', 'now') * 1000));",
            params![username, password_digest, contact_email],
        );

        match inserted {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<UserCredential>> {
        let credential = self
            .conn
            .query_row(
                "SELECT username, password_digest, contact_email, created_at
                 FROM users
                 WHERE username = ?1;",
                [username],
                |row| {
                    Ok(UserCredential {
                        username: row.get("username")?,
                        password_digest: row.get("password_digest")?,
                        contact_email: row.get("contact_email")?,
                        created_at: row.get("created_at")?,
                    })
                },
            )
            .optional()?;

        Ok(credential)
    }
}
