//! Student record domain model.
//!
//! # Responsibility
//! - Bind a client-submitted JSON document to the columns the store
//!   denormalizes for filtering.
//! - Validate identity fields before anything touches storage.
//!
//! # Invariants
//! - `id` is globally unique and client-supplied; it is never generated
//!   here.
//! - A record belongs to exactly one (batch, department) pair at a time;
//!   the pair carried on this struct is the most recently submitted one.
//! - `payload` is stored and returned verbatim; only the extracted fields
//!   below are ever interpreted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Document keys every student submission must carry.
const DOC_KEY_ID: &str = "id";
const DOC_KEY_NAME: &str = "name";
const DOC_KEY_ENROLLMENT_NO: &str = "enrollmentNo";

/// Validation error for client-submitted student documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentDocError {
    /// A required identity field is absent from the document.
    MissingField(&'static str),
    /// A required identity field is present but not a JSON string.
    NonStringField(&'static str),
}

impl Display for StudentDocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "student document is missing required field `{field}`")
            }
            Self::NonStringField(field) => {
                write!(f, "student document field `{field}` must be a string")
            }
        }
    }
}

impl Error for StudentDocError {}

/// Write model binding one student document to its indexed columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Client-supplied stable identity, unique across all partitions.
    pub id: String,
    /// Denormalized from the document for filtering.
    pub name: String,
    /// Serialized as `enrollmentNo` to match the client wire name.
    #[serde(rename = "enrollmentNo")]
    pub enrollment_no: String,
    /// Partition pair, submitted alongside the document rather than in it.
    pub batch: String,
    pub department: String,
    /// Full submitted document, including the fields extracted above.
    pub payload: Value,
}

impl StudentRecord {
    /// Binds a submitted document to a record under the given partition.
    ///
    /// # Contract
    /// - Extracts `id`, `name`, `enrollmentNo` from the document.
    /// - The document itself is kept untouched as `payload`.
    ///
    /// # Errors
    /// - `StudentDocError::MissingField` when an identity field is absent.
    /// - `StudentDocError::NonStringField` when one is not a JSON string.
    pub fn from_document(
        document: &Value,
        batch: impl Into<String>,
        department: impl Into<String>,
    ) -> Result<Self, StudentDocError> {
        Ok(Self {
            id: required_string_field(document, DOC_KEY_ID)?,
            name: required_string_field(document, DOC_KEY_NAME)?,
            enrollment_no: required_string_field(document, DOC_KEY_ENROLLMENT_NO)?,
            batch: batch.into(),
            department: department.into(),
            payload: document.clone(),
        })
    }
}

fn required_string_field(document: &Value, field: &'static str) -> Result<String, StudentDocError> {
    match document.get(field) {
        None | Some(Value::Null) => Err(StudentDocError::MissingField(field)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(StudentDocError::NonStringField(field)),
    }
}
