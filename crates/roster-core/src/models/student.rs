//! Student model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The primary mutable entity: a student enrolled at exactly one school.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Identifier of the school this student belongs to
    pub school_id: u64,

    /// Full name (2-100 characters)
    pub full_name: String,

    /// Student code (5-20 characters, unique across all students)
    pub student_code: String,

    /// Email address (unique across all students)
    pub email: String,

    /// Phone number: empty string, or exactly 10-11 digits
    pub phone: String,

    /// Timestamp when the student was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the student was last modified (UTC)
    pub updated_at: Timestamp,
}
