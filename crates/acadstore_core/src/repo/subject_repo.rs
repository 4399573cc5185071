//! Subject-list repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide save/get APIs over the `subject_lists` table.
//!
//! # Invariants
//! - Lists are keyed by the composite (department, semester) pair; the
//!   schema allows at most one row per pair.
//! - Saving replaces the stored list wholesale; entries are never merged.
//! - An absent pair reads back as an empty list, never as an error.

use crate::repo::student_repo::{
    decode_document, encode_document, ensure_connection_ready, RepoError, RepoResult,
};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde_json::Value;

/// Repository interface for subject-list operations.
pub trait SubjectRepository {
    /// Inserts or wholesale-replaces the list stored for the pair.
    fn save_subjects(
        &mut self,
        department: &str,
        semester: u32,
        subjects: &[Value],
    ) -> RepoResult<()>;
    /// Returns the stored list, or empty when no row matches.
    fn get_subjects(&self, department: &str, semester: u32) -> RepoResult<Vec<Value>>;
}

/// SQLite-backed subject-list repository.
pub struct SqliteSubjectRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteSubjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "subject_lists", &["department", "semester", "payload"])?;
        Ok(Self { conn })
    }
}

impl SubjectRepository for SqliteSubjectRepository<'_> {
    fn save_subjects(
        &mut self,
        department: &str,
        semester: u32,
        subjects: &[Value],
    ) -> RepoResult<()> {
        let payload_text = encode_document(&Value::Array(subjects.to_vec()))?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM subject_lists WHERE department = ?1 AND semester = ?2;",
                params![department, semester],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        if exists {
            tx.execute(
                "UPDATE subject_lists
                 SET payload = ?1
                 WHERE department = ?2 AND semester = ?3;",
                params![payload_text, department, semester],
            )?;
        } else {
            tx.execute(
                "INSERT INTO subject_lists (department, semester, payload)
                 VALUES (?1, ?2, ?3);",
                params![department, semester, payload_text],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn get_subjects(&self, department: &str, semester: u32) -> RepoResult<Vec<Value>> {
        let payload_text: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM subject_lists WHERE department = ?1 AND semester = ?2;",
                params![department, semester],
                |row| row.get(0),
            )
            .optional()?;

        match payload_text {
            Some(text) => match decode_document(&text, "subject_lists.payload")? {
                Value::Array(subjects) => Ok(subjects),
                _ => Err(RepoError::InvalidData(
                    "subject_lists.payload is not a JSON array".to_string(),
                )),
            },
            None => Ok(Vec::new()),
        }
    }
}
