//! Core persistence logic for the academic records store.
//! This crate is the single source of truth for storage invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::credential::UserCredential;
pub use model::student::{StudentDocError, StudentRecord};
pub use repo::credential_repo::{CredentialRepository, SqliteCredentialRepository};
pub use repo::student_repo::{
    RepoError, RepoResult, SqliteStudentRepository, StudentRepository,
};
pub use repo::subject_repo::{SqliteSubjectRepository, SubjectRepository};
pub use service::auth_service::{AuthService, AuthenticatedUser, SignupOutcome};
pub use service::student_service::StudentService;
pub use service::subject_service::SubjectService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
