//! User credential domain model.
//!
//! # Invariants
//! - `password_digest` is a one-way digest; plaintext never reaches storage.
//! - `created_at` is assigned once at insert and never updated.

use serde::{Deserialize, Serialize};

/// Stored credential record, keyed by `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    /// Globally unique login name.
    pub username: String,
    /// One-way digest of the password, hex encoded.
    pub password_digest: String,
    /// Optional institutional contact address.
    pub contact_email: Option<String>,
    /// Epoch ms creation timestamp, server-assigned.
    pub created_at: i64,
}
