//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide upsert/list/delete APIs over the `students` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Upsert identity is the document `id` alone; the stored partition pair
//!   is overwritten by whatever the caller submitted last.
//! - Repeated identical submissions leave storage unchanged.
//! - Delete is unconditionally idempotent: absent rows are a no-op.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::student::{StudentDocError, StudentRecord};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Client-submitted document failed identity validation.
    Validation(StudentDocError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Persisted data cannot be decoded back into a document.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<StudentDocError> for RepoError {
    fn from(value: StudentDocError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student record operations.
pub trait StudentRepository {
    /// Inserts or updates one record, keyed by the document `id`.
    fn upsert_student(
        &mut self,
        document: &Value,
        batch: &str,
        department: &str,
    ) -> RepoResult<String>;
    /// Lists stored documents whose partition pair matches exactly.
    fn list_students(&self, batch: &str, department: &str) -> RepoResult<Vec<Value>>;
    /// Deletes one record by id; absent ids succeed as a no-op.
    fn delete_student(&mut self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            "students",
            &[
                "id",
                "name",
                "enrollment_no",
                "batch",
                "department",
                "payload",
            ],
        )?;
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn upsert_student(
        &mut self,
        document: &Value,
        batch: &str,
        department: &str,
    ) -> RepoResult<String> {
        let record = StudentRecord::from_document(document, batch, department)?;
        let payload_text = encode_document(&record.payload)?;

        // Lookup and write happen in one immediate transaction, so the
        // insert-vs-update decision cannot be split by a concurrent writer.
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM students WHERE id = ?1;",
                [record.id.as_str()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        if exists {
            tx.execute(
                "UPDATE students
                 SET
                    name = ?1,
                    enrollment_no = ?2,
                    batch = ?3,
                    department = ?4,
                    payload = ?5
                 WHERE id = ?6;",
                params![
                    record.name,
                    record.enrollment_no,
                    record.batch,
                    record.department,
                    payload_text,
                    record.id,
                ],
            )?;
        } else {
            tx.execute(
                "INSERT INTO students (id, name, enrollment_no, batch, department, payload)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    record.id,
                    record.name,
                    record.enrollment_no,
                    record.batch,
                    record.department,
                    payload_text,
                ],
            )?;
        }

        tx.commit()?;
        Ok(record.id)
    }

    fn list_students(&self, batch: &str, department: &str) -> RepoResult<Vec<Value>> {
        let mut stmt = self.conn.prepare(
            "SELECT payload FROM students WHERE batch = ?1 AND department = ?2;",
        )?;
        let mut rows = stmt.query(params![batch, department])?;
        let mut documents = Vec::new();

        while let Some(row) = rows.next()? {
            let payload_text: String = row.get("payload")?;
            documents.push(decode_document(&payload_text, "students.payload")?);
        }

        Ok(documents)
    }

    fn delete_student(&mut self, id: &str) -> RepoResult<()> {
        // Affected-row count is intentionally not checked: deleting an
        // absent id must succeed.
        self.conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;
        Ok(())
    }
}

pub(crate) fn encode_document(document: &Value) -> RepoResult<String> {
    serde_json::to_string(document)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode document: {err}")))
}

pub(crate) fn decode_document(text: &str, column: &str) -> RepoResult<Value> {
    serde_json::from_str(text)
        .map_err(|err| RepoError::InvalidData(format!("invalid JSON in {column}: {err}")))
}

pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
