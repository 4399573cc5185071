//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per document family.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Write paths validate client-submitted documents before SQL mutations.
//! - Read paths reject undecodable persisted state instead of masking it.
//! - Every operation commits before returning; no repository holds a
//!   connection across a caller-visible boundary.

pub mod credential_repo;
pub mod student_repo;
pub mod subject_repo;
