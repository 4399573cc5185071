//! Subject-list use-case service.
//!
//! # Invariants
//! - Saving replaces the stored list wholesale.
//! - Reading an unknown pair yields an empty list, never an error.

use crate::repo::student_repo::RepoResult;
use crate::repo::subject_repo::SubjectRepository;
use serde_json::Value;

/// Use-case service wrapper for subject-list operations.
pub struct SubjectService<R: SubjectRepository> {
    repo: R,
}

impl<R: SubjectRepository> SubjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves the full subject list for one (department, semester) pair.
    pub fn save_subjects(
        &mut self,
        department: &str,
        semester: u32,
        subjects: &[Value],
    ) -> RepoResult<()> {
        self.repo.save_subjects(department, semester, subjects)
    }

    /// Returns the stored subject list, or empty when none was saved.
    pub fn get_subjects(&self, department: &str, semester: u32) -> RepoResult<Vec<Value>> {
        self.repo.get_subjects(department, semester)
    }
}
