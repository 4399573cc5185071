//! Student roster use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for roster submission and retrieval.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Roster documents are applied strictly in submission order.

use crate::repo::student_repo::{RepoResult, StudentRepository};
use log::info;
use serde_json::Value;

/// Use-case service wrapper for student record operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Applies every document of a submitted roster in order.
    ///
    /// # Contract
    /// - Each document is upserted individually, keyed by its `id`.
    /// - Returns the number of documents applied.
    /// - The first failing document aborts the remainder; previously
    ///   applied documents stay committed.
    pub fn apply_roster(
        &mut self,
        batch: &str,
        department: &str,
        documents: &[Value],
    ) -> RepoResult<usize> {
        for document in documents {
            self.repo.upsert_student(document, batch, department)?;
        }

        info!(
            "event=roster_applied module=service status=ok batch={} department={} count={}",
            batch,
            department,
            documents.len()
        );
        Ok(documents.len())
    }

    /// Lists stored documents for one partition pair.
    pub fn list_students(&self, batch: &str, department: &str) -> RepoResult<Vec<Value>> {
        self.repo.list_students(batch, department)
    }

    /// Deletes one record by id; absent ids succeed as a no-op.
    pub fn delete_student(&mut self, id: &str) -> RepoResult<()> {
        self.repo.delete_student(id)
    }
}
